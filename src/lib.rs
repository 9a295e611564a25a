pub mod assets;
pub mod captcha;
pub mod config;
pub mod content;
pub mod email;
pub mod i18n;
pub mod locale;
pub mod models;
pub mod routes;
pub mod search;
