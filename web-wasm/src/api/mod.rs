pub mod client;
pub mod location;
pub mod recaptcha;
