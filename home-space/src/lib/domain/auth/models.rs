use crate::domain::user::models::UserId;

/// Who the caller is, as asserted by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_name: String,
    pub user_id: Option<UserId>,
}

impl From<::auth::Claims> for Identity {
    fn from(claims: ::auth::Claims) -> Self {
        Self {
            user_name: claims.user_name,
            user_id: claims.user_id.map(UserId),
        }
    }
}

/// Identity resolved for a single request.
///
/// Built once by the resolver middleware and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationContext {
    Authenticated(Identity),
    Unauthenticated,
}

impl AuthenticationContext {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthenticationContext::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthenticationContext::Authenticated(identity) => Some(identity),
            AuthenticationContext::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_claims() {
        let claims = ::auth::Claims::for_user("alice").with_user_id(9);
        let identity = Identity::from(claims);

        assert_eq!(identity.user_name, "alice");
        assert_eq!(identity.user_id, Some(UserId(9)));
    }

    #[test]
    fn test_context_accessors() {
        let identity = Identity {
            user_name: "alice".to_string(),
            user_id: None,
        };
        let authenticated = AuthenticationContext::Authenticated(identity.clone());

        assert!(authenticated.is_authenticated());
        assert_eq!(authenticated.identity(), Some(&identity));
        assert!(!AuthenticationContext::Unauthenticated.is_authenticated());
        assert_eq!(AuthenticationContext::Unauthenticated.identity(), None);
    }
}
