
/// Address the contact relay forwards submissions to. Override at build time
/// with `PORTFOLIO_CONTACT_EMAIL`.
pub const CONTACT_EMAIL: &str = match option_env!("PORTFOLIO_CONTACT_EMAIL") {
    Some(email) => email,
    None => "nimmagaddaharish4797@gmail.com",
};

pub const RESUME_PATH: &str = "/resume.pdf";

#[cfg(debug_assertions)]
pub fn get_relay_base_url() -> &'static str {
    match option_env!("PORTFOLIO_RELAY_URL") {
        Some(url) => url,  // Local mock relay while developing
        None => "https://formsubmit.co/ajax",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_relay_base_url() -> &'static str {
    "https://formsubmit.co/ajax"
}

pub fn relay_endpoint() -> String {
    format!("{}/{}", get_relay_base_url(), CONTACT_EMAIL)
}
