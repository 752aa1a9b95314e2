//! Challenge/response authentication for obs-websocket.
//!
//! When the server's [`Hello`](crate::Hello) carries an
//! [`AuthChallenge`], the client proves knowledge of the password without
//! sending it:
//!
//! ```text
//! secret = base64(sha256(password ++ salt))
//! auth   = base64(sha256(secret ++ challenge))
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

use crate::message::AuthChallenge;

/// Derives the `authentication` string for [`Identify`](crate::Identify).
pub fn authentication_string(password: &str, challenge: &AuthChallenge) -> String {
	let secret = digest_base64(&[password.as_bytes(), challenge.salt.as_bytes()]);
	digest_base64(&[secret.as_bytes(), challenge.challenge.as_bytes()])
}

fn digest_base64(parts: &[&[u8]]) -> String {
	let mut hasher = Sha256::new();
	for part in parts {
		hasher.update(part);
	}
	STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn challenge() -> AuthChallenge {
		AuthChallenge {
			challenge: "+IxH4CnCiqpX1rM9scsNynZzbOe4KhDeYcTNS3PDaeY=".to_string(),
			salt: "lM1GncleQOaCu9lT1yeUZhFYnqhsLLP1G5lAGo3ixaI=".to_string(),
		}
	}

	#[test]
	fn secret_matches_reference_digest() {
		let challenge = challenge();
		let secret = digest_base64(&[b"supersecretpassword", challenge.salt.as_bytes()]);
		assert_eq!(secret, "H1IfVz1pSREUQzbFTVnX/Tyb+gMhMik5x7yUBCY0PTs=");
	}

	#[test]
	fn authentication_string_matches_reference_digest() {
		assert_eq!(
			authentication_string("supersecretpassword", &challenge()),
			"1Ct943GAT+6YQUUX47Ia/ncufilbe6+oD6lY+5kaCu4="
		);
	}

	#[test]
	fn different_passwords_produce_different_strings() {
		let challenge = challenge();
		assert_ne!(authentication_string("a", &challenge), authentication_string("b", &challenge));
	}
}
