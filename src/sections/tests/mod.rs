mod footer_tests;
