mod health_check;
mod helpers;
mod newsletter_data;
mod newsletter_page;
