// ═══════════════════════════════════════════════════════════════════
// Error Tests: CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn transaction_fetch() {
        let err = CoreError::TransactionFetch("connection reset".into());
        assert_eq!(err.to_string(), "Failed to fetch transactions: connection reset");
    }

    #[test]
    fn category_fetch() {
        let err = CoreError::CategoryFetch("timeout".into());
        assert_eq!(err.to_string(), "Failed to fetch categories: timeout");
    }

    #[test]
    fn unauthorized() {
        let err = CoreError::Unauthorized("token expired".into());
        assert_eq!(err.to_string(), "Unauthorized: token expired");
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("rollup_months must be between 1 and 120, got 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid settings: rollup_months must be between 1 and 120, got 0"
        );
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn empty_message() {
        let err = CoreError::TransactionFetch(String::new());
        assert_eq!(err.to_string(), "Failed to fetch transactions: ");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let message = json_err.to_string();
        let err: CoreError = json_err.into();
        match err {
            CoreError::Deserialization(inner) => assert_eq!(inner, message),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn question_mark_converts() {
        fn parse(raw: &str) -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(matches!(parse("nope"), Err(CoreError::Deserialization(_))));
        assert!(parse("{}").is_ok());
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

#[test]
fn is_std_error_and_thread_safe() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CoreError>();
}
