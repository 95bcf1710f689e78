mod validators_tests;
