//! Transcript <-> text codec for the hidden `history` form field
//!
//! The wire form is a JSON array of `{"role", "content"}` objects, the same
//! shape the provider accepts.

use super::{Transcript, Turn};
use thiserror::Error;

/// The resubmitted history could not be turned back into a transcript
#[derive(Debug, Error)]
pub enum MalformedTranscript {
    #[error("conversation history is not valid: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("conversation history contains no messages")]
    Empty,
}

pub fn encode(transcript: &Transcript) -> Result<String, serde_json::Error> {
    serde_json::to_string(transcript.turns())
}

pub fn decode(text: &str) -> Result<Transcript, MalformedTranscript> {
    let turns: Vec<Turn> = serde_json::from_str(text)?;
    Transcript::from_turns(turns).ok_or(MalformedTranscript::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::strategies::arb_transcript;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(t in arb_transcript()) {
            prop_assert_eq!(decode(&encode(&t).unwrap()).unwrap(), t);
        }

        #[test]
        fn prop_encode_is_injective(a in arb_transcript(), b in arb_transcript()) {
            if a != b {
                prop_assert_ne!(encode(&a).unwrap(), encode(&b).unwrap());
            }
        }
    }

    #[test]
    fn test_wire_shape() {
        let t = Transcript::seeded("be nice", "hello");
        assert_eq!(
            encode(&t).unwrap(),
            r#"[{"role":"system","content":"be nice"},{"role":"assistant","content":"hello"}]"#
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not json at all"),
            Err(MalformedTranscript::Syntax(_))
        ));
        assert!(matches!(
            decode(r#"[{"role":"system","content":"x"}"#),
            Err(MalformedTranscript::Syntax(_))
        ));
        assert!(matches!(
            decode(r#"{"role":"user","content":"x"}"#),
            Err(MalformedTranscript::Syntax(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_role() {
        let err = decode(r#"[{"role":"tool","content":"x"}]"#).unwrap_err();
        assert!(matches!(err, MalformedTranscript::Syntax(_)));
    }

    #[test]
    fn test_decode_rejects_missing_content() {
        assert!(decode(r#"[{"role":"user"}]"#).is_err());
    }

    #[test]
    fn test_decode_rejects_empty_history() {
        assert!(matches!(decode("[]"), Err(MalformedTranscript::Empty)));
        // What an empty hidden field submits
        assert!(matches!(decode(""), Err(MalformedTranscript::Syntax(_))));
    }
}
