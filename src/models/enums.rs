use crate::db::DatabaseError;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form is also the serde representation.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SeizureType {
    TonicClonic => "tonic-clonic",
    Absence => "absence",
    Focal => "focal",
    Myoclonic => "myoclonic",
    Atonic => "atonic",
    Other => "other",
});

impl SeizureType {
    pub const ALL: [SeizureType; 6] = [
        Self::TonicClonic,
        Self::Absence,
        Self::Focal,
        Self::Myoclonic,
        Self::Atonic,
        Self::Other,
    ];

    /// Display label used in reports and distributions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TonicClonic => "Tonic-Clonic",
            Self::Absence => "Absence",
            Self::Focal => "Focal",
            Self::Myoclonic => "Myoclonic",
            Self::Atonic => "Atonic",
            Self::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TonicClonic => "Full body convulsions",
            Self::Absence => "Brief loss of awareness",
            Self::Focal => "Affects one area of the brain",
            Self::Myoclonic => "Quick jerking movements",
            Self::Atonic => "Sudden loss of muscle tone",
            Self::Other => "Other type of seizure",
        }
    }
}

str_enum!(ReportRange {
    Last7Days => "7d",
    Last30Days => "30d",
    Last90Days => "90d",
    Last6Months => "6m",
    LastYear => "1y",
});

impl ReportRange {
    pub const ALL: [ReportRange; 5] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last90Days,
        Self::Last6Months,
        Self::LastYear,
    ];

    /// First day of the window ending at `today`. Month ranges clamp to the
    /// last day of a shorter month.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Last7Days => today - Duration::days(7),
            Self::Last30Days => today - Duration::days(30),
            Self::Last90Days => today - Duration::days(90),
            Self::Last6Months => today.checked_sub_months(Months::new(6)).unwrap_or(NaiveDate::MIN),
            Self::LastYear => today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN),
        }
    }

    /// Short ranges chart one bucket per day, longer ones one per week.
    pub fn is_daily(&self) -> bool {
        matches!(self, Self::Last7Days | Self::Last30Days)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "7 days",
            Self::Last30Days => "30 days",
            Self::Last90Days => "90 days",
            Self::Last6Months => "6 months",
            Self::LastYear => "1 year",
        }
    }
}
