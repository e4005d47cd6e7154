use crate::core::tokener::{Payload, Tokener};
use crate::error::Error;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

pub struct JWT {
    secret: Vec<u8>,
}

impl JWT {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }
}

impl<P> Tokener<P> for JWT
where
    P: Payload,
{
    fn gen_token(&self, payload: &P) -> Result<String, Error> {
        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(&self.secret);
        let token = encode(&header, payload, &key)?;
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> Result<P, Error> {
        let key = DecodingKey::from_secret(&self.secret);
        let validation = Validation::new(Algorithm::HS256);
        let payload = decode(token, &key, &validation)?;
        Ok(payload.claims)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::middlewares::jwt::Claim;
    use chrono::{Duration, Utc};

    fn claim(user: &str) -> Claim {
        Claim {
            user: user.into(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        }
    }

    #[test]
    fn test_gen_and_verify_token() {
        let jwt = JWT::new(b"moderation-secret".to_vec());
        let token = jwt.gen_token(&claim("alice")).unwrap();
        let c: Claim = jwt.verify_token(&token).unwrap();
        assert_eq!(c.user(), "alice");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JWT::new(b"one".to_vec()).gen_token(&claim("alice")).unwrap();
        let res: Result<Claim, Error> = JWT::new(b"two".to_vec()).verify_token(&token);
        assert!(matches!(res, Err(Error::JWTError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt = JWT::new(b"moderation-secret".to_vec());
        let expired = Claim {
            user: "alice".into(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = jwt.gen_token(&expired).unwrap();
        let res: Result<Claim, Error> = jwt.verify_token(&token);
        assert!(res.is_err());
    }
}
