//! The input boundary: birth records and their validation.

use std::str::FromStr;

use chrono::NaiveDate;
use saju_base::ClockTime;
use serde::Deserialize;

use crate::error::SajuError;

/// Gender tag. Carried through to the output; the engine does not use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// 남 or 여.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "남" || t.eq_ignore_ascii_case("male") || t.eq_ignore_ascii_case("m") {
            Ok(Self::Male)
        } else if t == "여" || t.eq_ignore_ascii_case("female") || t.eq_ignore_ascii_case("f") {
            Ok(Self::Female)
        } else {
            Err(SajuError::InvalidGender(s.to_string()))
        }
    }
}

/// A validated birth record.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthRecord {
    /// Proleptic Gregorian birth date.
    pub birth_date: NaiveDate,
    /// Civil clock time of birth, before location correction.
    pub birth_time: ClockTime,
    pub gender: Gender,
    /// Free-text birthplace, matched case-sensitively against the region table.
    pub birth_location: String,
}

impl BirthRecord {
    pub fn new(
        birth_date: NaiveDate,
        birth_time: ClockTime,
        gender: Gender,
        birth_location: impl Into<String>,
    ) -> Self {
        Self {
            birth_date,
            birth_time,
            gender,
            birth_location: birth_location.into(),
        }
    }

    /// Validate the raw string fields of a request.
    pub fn parse(
        birth_date: &str,
        birth_time: &str,
        gender: &str,
        birth_location: &str,
    ) -> Result<Self, SajuError> {
        Ok(Self {
            birth_date: parse_date(birth_date)?,
            birth_time: parse_time(birth_time)?,
            gender: gender.parse()?,
            birth_location: birth_location.trim().to_string(),
        })
    }
}

/// Parse a `YYYY-MM-DD` date: exactly four, two and two digits.
pub fn parse_date(s: &str) -> Result<NaiveDate, SajuError> {
    let t = s.trim();
    let shape_ok = t.len() == 10
        && t.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(SajuError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| SajuError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` clock time.
pub fn parse_time(s: &str) -> Result<ClockTime, SajuError> {
    s.parse::<ClockTime>()
        .map_err(|e| SajuError::InvalidTime(e.to_string()))
}

/// Raw request shape as sent by a client. Field names accept both the
/// snake_case and camelCase spellings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BirthRequest {
    #[serde(alias = "birthDate")]
    pub birth_date: String,
    #[serde(alias = "birthTime")]
    pub birth_time: String,
    pub gender: String,
    #[serde(alias = "birthPlace", alias = "birth_location", alias = "address")]
    pub birth_place: String,
}

impl TryFrom<&BirthRequest> for BirthRecord {
    type Error = SajuError;

    fn try_from(req: &BirthRequest) -> Result<Self, Self::Error> {
        BirthRecord::parse(&req.birth_date, &req.birth_time, &req.gender, &req.birth_place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_record() {
        let r = BirthRecord::parse("1997-05-07", "12:00", "남", "서울").unwrap();
        assert_eq!(r.birth_date, NaiveDate::from_ymd_opt(1997, 5, 7).unwrap());
        assert_eq!(r.birth_time, ClockTime::new(12, 0).unwrap());
        assert_eq!(r.gender, Gender::Male);
        assert_eq!(r.birth_location, "서울");
    }

    #[test]
    fn rejects_bad_date() {
        for s in ["1997-02-30", "1997/05/07", "yesterday", ""] {
            assert!(
                matches!(parse_date(s), Err(SajuError::InvalidDate(_))),
                "accepted {s:?}"
            );
        }
    }

    #[test]
    fn date_shape_is_strict() {
        for s in ["1997-5-7", "1997-05-7", "+1997-05-07", "19970-05-07", "1997-05-07T00"] {
            assert!(
                matches!(parse_date(s), Err(SajuError::InvalidDate(_))),
                "accepted {s:?}"
            );
        }
        assert_eq!(
            parse_date(" 0001-01-01 ").unwrap(),
            NaiveDate::from_ymd_opt(1, 1, 1).unwrap()
        );
    }

    #[test]
    fn bad_date_keeps_raw_input() {
        assert_eq!(
            parse_date("1997-5-7"),
            Err(SajuError::InvalidDate("1997-5-7".to_string()))
        );
    }

    #[test]
    fn rejects_bad_time() {
        for s in ["24:00", "12:60", "noon", "12"] {
            assert!(
                matches!(parse_time(s), Err(SajuError::InvalidTime(_))),
                "accepted {s:?}"
            );
        }
    }

    #[test]
    fn gender_spellings() {
        assert_eq!("여".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn request_from_camel_case_json() {
        let req: BirthRequest = serde_json::from_str(
            r#"{"birthDate":"1997-05-07","birthTime":"12:00","gender":"남","address":"서울"}"#,
        )
        .unwrap();
        let r = BirthRecord::try_from(&req).unwrap();
        assert_eq!(r.birth_location, "서울");
    }
}
