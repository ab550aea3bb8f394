//! Unified error codes for hotel room administration
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Room errors
//! - 2xxx: Room type errors (standard room types, room type configurations)
//! - 3xxx: Reference data errors (stay types, amenities, areas, view types, meal plans)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization
/// and stable comparison across persisted records and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Room ====================
    /// Room not found
    RoomNotFound = 1001,
    /// Room number already used by another room
    RoomNumberExists = 1002,
    /// Room number is required
    RoomNumberRequired = 1003,
    /// At least one amenity must be selected
    RoomAmenitiesRequired = 1004,
    /// Room has already been removed
    RoomAlreadyDeleted = 1005,
    /// Requested status change is not offered
    InvalidStatusTransition = 1006,

    // ==================== 2xxx: Room type ====================
    /// Standard room type not found
    StandardRoomTypeNotFound = 2001,
    /// Standard room type name already exists
    StandardRoomTypeNameExists = 2002,
    /// Standard room type is referenced by room types or rooms
    StandardRoomTypeInUse = 2003,
    /// Room type not found
    RoomTypeNotFound = 2101,
    /// Room type name already exists
    RoomTypeNameExists = 2102,
    /// Room type is referenced by rooms
    RoomTypeInUse = 2103,
    /// Capacity is derived from the bound standard room type
    RoomTypeCapacityLocked = 2104,

    // ==================== 3xxx: Reference data ====================
    /// Stay type not found
    StayTypeNotFound = 3001,
    /// Stay type name already exists
    StayTypeNameExists = 3002,
    /// Stay type is referenced by rooms
    StayTypeInUse = 3003,
    /// Amenity not found
    AmenityNotFound = 3101,
    /// Amenity name already exists
    AmenityNameExists = 3102,
    /// Amenity is referenced by rooms or room types
    AmenityInUse = 3103,
    /// Area not found
    AreaNotFound = 3201,
    /// Area name already exists
    AreaNameExists = 3202,
    /// Area is referenced by rooms
    AreaInUse = 3203,
    /// View type not found
    ViewTypeNotFound = 3301,
    /// View type name already exists
    ViewTypeNameExists = 3302,
    /// View type is referenced by rooms
    ViewTypeInUse = 3303,
    /// Meal plan not found
    MealPlanNotFound = 3401,
    /// Meal plan name or code already exists
    MealPlanNameExists = 3402,
    /// Meal plan is referenced by rooms
    MealPlanInUse = 3403,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,

    // ==================== 94xx: Storage ====================
    /// Storage corrupted (data file damaged or undecodable)
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNumberExists => "Room number already exists",
            ErrorCode::RoomNumberRequired => "Room number is required",
            ErrorCode::RoomAmenitiesRequired => "Select at least one amenity",
            ErrorCode::RoomAlreadyDeleted => "Room has already been removed",
            ErrorCode::InvalidStatusTransition => "Status change is not allowed",

            // Room type
            ErrorCode::StandardRoomTypeNotFound => "Standard room type not found",
            ErrorCode::StandardRoomTypeNameExists => "Standard room type name already exists",
            ErrorCode::StandardRoomTypeInUse => "Standard room type is in use",
            ErrorCode::RoomTypeNotFound => "Room type not found",
            ErrorCode::RoomTypeNameExists => "Room type name already exists",
            ErrorCode::RoomTypeInUse => "Room type is in use by rooms",
            ErrorCode::RoomTypeCapacityLocked => {
                "Capacity is inherited from the standard room type"
            }

            // Reference data
            ErrorCode::StayTypeNotFound => "Stay type not found",
            ErrorCode::StayTypeNameExists => "Stay type name already exists",
            ErrorCode::StayTypeInUse => "Stay type is in use by rooms",
            ErrorCode::AmenityNotFound => "Amenity not found",
            ErrorCode::AmenityNameExists => "Amenity name already exists",
            ErrorCode::AmenityInUse => "Amenity is in use by rooms or room types",
            ErrorCode::AreaNotFound => "Area not found",
            ErrorCode::AreaNameExists => "Area name already exists",
            ErrorCode::AreaInUse => "Area is in use by rooms",
            ErrorCode::ViewTypeNotFound => "View type not found",
            ErrorCode::ViewTypeNameExists => "View type name already exists",
            ErrorCode::ViewTypeInUse => "View type is in use by rooms",
            ErrorCode::MealPlanNotFound => "Meal plan not found",
            ErrorCode::MealPlanNameExists => "Meal plan name or code already exists",
            ErrorCode::MealPlanInUse => "Meal plan is in use by rooms",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageCorrupted => "Storage is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Room
            1001 => Ok(ErrorCode::RoomNotFound),
            1002 => Ok(ErrorCode::RoomNumberExists),
            1003 => Ok(ErrorCode::RoomNumberRequired),
            1004 => Ok(ErrorCode::RoomAmenitiesRequired),
            1005 => Ok(ErrorCode::RoomAlreadyDeleted),
            1006 => Ok(ErrorCode::InvalidStatusTransition),

            // Room type
            2001 => Ok(ErrorCode::StandardRoomTypeNotFound),
            2002 => Ok(ErrorCode::StandardRoomTypeNameExists),
            2003 => Ok(ErrorCode::StandardRoomTypeInUse),
            2101 => Ok(ErrorCode::RoomTypeNotFound),
            2102 => Ok(ErrorCode::RoomTypeNameExists),
            2103 => Ok(ErrorCode::RoomTypeInUse),
            2104 => Ok(ErrorCode::RoomTypeCapacityLocked),

            // Reference data
            3001 => Ok(ErrorCode::StayTypeNotFound),
            3002 => Ok(ErrorCode::StayTypeNameExists),
            3003 => Ok(ErrorCode::StayTypeInUse),
            3101 => Ok(ErrorCode::AmenityNotFound),
            3102 => Ok(ErrorCode::AmenityNameExists),
            3103 => Ok(ErrorCode::AmenityInUse),
            3201 => Ok(ErrorCode::AreaNotFound),
            3202 => Ok(ErrorCode::AreaNameExists),
            3203 => Ok(ErrorCode::AreaInUse),
            3301 => Ok(ErrorCode::ViewTypeNotFound),
            3302 => Ok(ErrorCode::ViewTypeNameExists),
            3303 => Ok(ErrorCode::ViewTypeInUse),
            3401 => Ok(ErrorCode::MealPlanNotFound),
            3402 => Ok(ErrorCode::MealPlanNameExists),
            3403 => Ok(ErrorCode::MealPlanInUse),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        assert_eq!(ErrorCode::RoomNotFound.code(), 1001);
        assert_eq!(ErrorCode::RoomNumberExists.code(), 1002);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 1006);

        assert_eq!(ErrorCode::StandardRoomTypeNameExists.code(), 2002);
        assert_eq!(ErrorCode::RoomTypeCapacityLocked.code(), 2104);

        assert_eq!(ErrorCode::ViewTypeNotFound.code(), 3301);
        assert_eq!(ErrorCode::MealPlanInUse.code(), 3403);

        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9403);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(1), Ok(ErrorCode::Unknown));
        assert_eq!(ErrorCode::try_from(1004), Ok(ErrorCode::RoomAmenitiesRequired));
        assert_eq!(ErrorCode::try_from(2003), Ok(ErrorCode::StandardRoomTypeInUse));
        assert_eq!(ErrorCode::try_from(3203), Ok(ErrorCode::AreaInUse));
        assert_eq!(ErrorCode::try_from(9403), Ok(ErrorCode::StorageCorrupted));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::RoomNumberExists).unwrap();
        assert_eq!(json, "1002");

        let code: ErrorCode = serde_json::from_str("3102").unwrap();
        assert_eq!(code, ErrorCode::AmenityNameExists);

        let result: Result<ErrorCode, _> = serde_json::from_str("7001");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::RoomNotFound), "1001");
        assert_eq!(ErrorCode::RoomNotFound.message(), "Room not found");
        assert_eq!(
            format!("{}", InvalidErrorCode(42)),
            "invalid error code: 42"
        );
    }
}
