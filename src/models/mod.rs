pub mod appointment;
pub mod clock;
pub mod contact;
pub mod enums;
pub mod journal;
pub mod medication;
pub mod reminder;
pub mod seizure;
pub mod validation;

pub use appointment::*;
pub use clock::*;
pub use contact::*;
pub use enums::*;
pub use journal::*;
pub use medication::*;
pub use reminder::*;
pub use seizure::*;
pub use validation::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A stored entity with a string identity.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned {
    /// Entity name used in log fields.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Checks the entity invariants.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// An add payload: everything but the id.
pub trait NewRecord {
    type Record: Record;

    fn into_record(self, id: String) -> Self::Record;
}

/// A shallow partial update.
pub trait RecordPatch<T> {
    fn apply(self, record: &mut T);
}
