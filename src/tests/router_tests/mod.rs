mod company_tests;
mod notification_tests;
mod review_tests;
