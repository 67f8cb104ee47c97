mod expression_test;
