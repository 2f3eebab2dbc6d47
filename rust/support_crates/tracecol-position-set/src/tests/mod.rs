mod position_set_tests;
