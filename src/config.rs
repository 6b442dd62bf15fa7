use chrono::FixedOffset;
use std::env;

use crate::analytics::validate_window;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    pub jwt_secret: String,

    /// Timezone whose midnight-to-midnight days bucket mood entries.
    pub analytics_offset: FixedOffset,
    pub default_window_days: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let offset_minutes: i32 = env::var("ANALYTICS_UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("ANALYTICS_UTC_OFFSET_MINUTES must be a number");

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),

            analytics_offset: offset_from_minutes(offset_minutes)
                .expect("ANALYTICS_UTC_OFFSET_MINUTES must be within +/- 24 hours"),
            default_window_days: parse_window_days(
                &env::var("ANALYTICS_DEFAULT_WINDOW_DAYS").unwrap_or_else(|_| "14".into()),
            )
            .unwrap_or_else(|err| panic!("{err}")),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}

/// Default analytics window; must be a window `analyze` accepts.
pub fn parse_window_days(raw: &str) -> Result<i64, String> {
    let days: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("ANALYTICS_DEFAULT_WINDOW_DAYS must be a number, got {raw:?}"))?;
    validate_window(days).map_err(|err| format!("ANALYTICS_DEFAULT_WINDOW_DAYS: {err}"))?;
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_minutes() {
        assert_eq!(offset_from_minutes(0).unwrap().local_minus_utc(), 0);
        assert_eq!(offset_from_minutes(-300).unwrap().local_minus_utc(), -18_000);
        assert_eq!(offset_from_minutes(330).unwrap().local_minus_utc(), 19_800);
    }

    #[test]
    fn test_offset_out_of_range() {
        assert!(offset_from_minutes(24 * 60).is_none());
        assert!(offset_from_minutes(i32::MAX).is_none());
    }

    #[test]
    fn test_parse_window_days() {
        assert_eq!(parse_window_days("14"), Ok(14));
        assert_eq!(parse_window_days(" 7 "), Ok(7));
        assert_eq!(parse_window_days("366"), Ok(366));
    }

    #[test]
    fn test_parse_window_days_rejects_typo() {
        let err = parse_window_days("two").unwrap_err();
        assert!(err.contains("must be a number"));
    }

    #[test]
    fn test_parse_window_days_rejects_out_of_range() {
        for raw in ["0", "-3", "500"] {
            let err = parse_window_days(raw).unwrap_err();
            assert!(err.contains("window must be between 1 and 366 days"), "{raw}");
        }
    }
}
