//! Authentication endpoints
//!
//! - `POST /register` - Create an account, returns `{ token, user }`
//! - `POST /login` - Credential login, returns `{ token, user }`
//! - `POST /auth/google/callback` - Exchange a Google ID token for a session
//! - `POST /logout` - Revoke the current token
//! - `GET /user` - The signed-in user

pub const REGISTER: &str = "/register";
pub const LOGIN: &str = "/login";
pub const GOOGLE_CALLBACK: &str = "/auth/google/callback";
pub const LOGOUT: &str = "/logout";
pub const CURRENT_USER: &str = "/user";
