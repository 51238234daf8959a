use std::time;

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claim::Claim;

pub struct JwtToken {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_duration: u64,
}

impl JwtToken {
    pub fn new(secret: &str, expiry_duration: &u64) -> Self {
        tb_log::info(Some("⚡"), "JwtToken: Initializing component");

        let secret = secret.as_bytes();
        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiry_duration: *expiry_duration,
        }
    }

    pub fn encode(&self, id: &Uuid) -> Result<String> {
        let expiration_time = match usize::try_from(
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)?
                .as_secs()
                + self.expiry_duration,
        ) {
            Ok(time) => time,
            Err(err) => return Err(err.into()),
        };

        Ok(encode(
            &self.header,
            &Claim::new(id, &expiration_time),
            &self.encoding_key,
        )?)
    }

    pub fn decode(&self, token: &str) -> Result<Claim> {
        Ok(decode::<Claim>(token, &self.decoding_key, &Validation::default())?.claims)
    }

    pub fn need_renew(&self, claim: &Claim) -> Result<bool> {
        let expiry = match u64::try_from(*claim.exp()) {
            Ok(expiry) => expiry,
            Err(err) => return Err(err.into()),
        };
        if expiry - (self.expiry_duration / 2)
            < time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)?
                .as_secs()
        {
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn renew(&self, claim: &Claim) -> Result<String> {
        self.encode(claim.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_returns_the_same_id() {
        let jwt = JwtToken::new("secret", &3600);
        let id = Uuid::now_v7();

        let token = jwt.encode(&id).unwrap();
        let claim = jwt.decode(&token).unwrap();

        assert_eq!(claim.id(), &id);
    }

    #[test]
    fn decode_rejects_a_token_signed_with_another_secret() {
        let jwt = JwtToken::new("secret", &3600);
        let other = JwtToken::new("other_secret", &3600);
        let id = Uuid::now_v7();

        let token = other.encode(&id).unwrap();

        assert!(jwt.decode(&token).is_err());
    }

    #[test]
    fn fresh_token_does_not_need_renewal() {
        let jwt = JwtToken::new("secret", &3600);
        let id = Uuid::now_v7();

        let token = jwt.encode(&id).unwrap();
        let claim = jwt.decode(&token).unwrap();

        assert!(!jwt.need_renew(&claim).unwrap());
    }

    #[test]
    fn token_past_half_life_needs_renewal() {
        let jwt = JwtToken::new("secret", &3600);
        let id = Uuid::now_v7();

        let exp = usize::try_from(
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .unwrap()
                .as_secs()
                + 1000,
        )
        .unwrap();
        let claim = Claim::new(&id, &exp);

        assert!(jwt.need_renew(&claim).unwrap());
    }

    #[test]
    fn renew_produces_a_decodable_token() {
        let jwt = JwtToken::new("secret", &3600);
        let id = Uuid::now_v7();

        let token = jwt.encode(&id).unwrap();
        let claim = jwt.decode(&token).unwrap();
        let renewed = jwt.renew(&claim).unwrap();

        assert_eq!(jwt.decode(&renewed).unwrap().id(), &id);
    }
}
