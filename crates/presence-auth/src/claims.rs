//! Session identity and token claim structures.
//!
//! - [`Principal`]: who is logged in, as a tagged union of the three account kinds
//! - [`SessionIdentity`]: the principal plus its display name
//! - [`SessionClaims`]: the wire form signed into the session cookie
//! - [`FlashClaims`]: the wire form of a one-shot [`Notice`]

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// The three flat account kinds. Serialized as `admin`, `teacher`, `student`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Admin,
    Teacher,
    Student,
}

impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

/// Authenticated account, tagged by kind and carrying its record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Admin(i32),
    Teacher(i32),
    Student(i32),
}

impl Principal {
    pub fn new(kind: UserKind, id: i32) -> Self {
        match kind {
            UserKind::Admin => Self::Admin(id),
            UserKind::Teacher => Self::Teacher(id),
            UserKind::Student => Self::Student(id),
        }
    }

    pub fn kind(&self) -> UserKind {
        match self {
            Self::Admin(_) => UserKind::Admin,
            Self::Teacher(_) => UserKind::Teacher,
            Self::Student(_) => UserKind::Student,
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            Self::Admin(id) | Self::Teacher(id) | Self::Student(id) => id,
        }
    }
}

/// The transient `{type, id, name}` record established at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub principal: Principal,
    pub name: String,
}

impl SessionIdentity {
    pub fn new(principal: Principal, name: impl Into<String>) -> Self {
        Self {
            principal,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> UserKind {
        self.principal.kind()
    }

    pub fn id(&self) -> i32 {
        self.principal.id()
    }
}

impl Serialize for SessionIdentity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SessionIdentity", 3)?;
        state.serialize_field("type", &self.kind())?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("name", &self.name)?;
        state.end()
    }
}

/// Claims signed into the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Record id of the account (subject claim)
    pub sub: i32,
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub name: String,
    pub exp: usize,
    pub iat: usize,
}

impl SessionClaims {
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity::new(Principal::new(self.kind, self.sub), self.name.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A one-shot message shown on the next page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Claims signed into the flash cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashClaims {
    pub level: NoticeLevel,
    pub message: String,
    pub exp: usize,
    pub iat: usize,
}

impl FlashClaims {
    pub fn notice(self) -> Notice {
        Notice {
            level: self.level,
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_round_trips_kind_and_id() {
        for kind in [UserKind::Admin, UserKind::Teacher, UserKind::Student] {
            let principal = Principal::new(kind, 42);
            assert_eq!(principal.kind(), kind);
            assert_eq!(principal.id(), 42);
        }
    }

    #[test]
    fn test_principal_pattern_matching() {
        let principal = Principal::new(UserKind::Teacher, 7);
        assert!(matches!(principal, Principal::Teacher(7)));
        assert!(!matches!(principal, Principal::Admin(_)));
    }

    #[test]
    fn test_session_identity_serializes_as_flat_record() {
        let identity = SessionIdentity::new(Principal::Student(3), "Awa Diallo");
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["type"], "student");
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Awa Diallo");
    }

    #[test]
    fn test_session_claims_wire_format() {
        let claims = SessionClaims {
            sub: 9,
            kind: UserKind::Admin,
            name: "Root".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""type":"admin""#));
        assert!(serialized.contains(r#""sub":9"#));

        let identity = claims.identity();
        assert_eq!(identity.principal, Principal::Admin(9));
        assert_eq!(identity.name, "Root");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"sub":1,"type":"guest","name":"x","exp":1,"iat":1}"#;
        assert!(serde_json::from_str::<SessionClaims>(json).is_err());
    }

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::success("ok").level, NoticeLevel::Success);
        assert_eq!(Notice::error("ko").level, NoticeLevel::Error);
        let json = serde_json::to_value(Notice::error("ko")).unwrap();
        assert_eq!(json["level"], "error");
    }
}
