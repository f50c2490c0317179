//! Well-known role name constants.
//!
//! Role names travel inside JWT claims. The `admin` role is derived from
//! `personas.es_admin` when tokens are issued; everyone else is `miembro`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MIEMBRO: &str = "miembro";
