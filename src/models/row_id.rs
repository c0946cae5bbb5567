use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, TypeInfo, ValueRef};

/// A primary or foreign key exactly as the external writer stored it.
///
/// Integer keys are the common case, but text keys (transaction hashes,
/// composite ids) are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Real(f64),
    Text(String),
}

impl Type<Sqlite> for RowId {
    fn type_info() -> SqliteTypeInfo {
        <i64 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <i64 as Type<Sqlite>>::compatible(ty)
            || <f64 as Type<Sqlite>>::compatible(ty)
            || <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for RowId {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let storage = value.type_info().name().to_owned();
        match storage.as_str() {
            "INTEGER" => Ok(RowId::Int(<i64 as Decode<Sqlite>>::decode(value)?)),
            "REAL" => Ok(RowId::Real(<f64 as Decode<Sqlite>>::decode(value)?)),
            _ => Ok(RowId::Text(<String as Decode<Sqlite>>::decode(value)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_stored_form() {
        assert_eq!(serde_json::to_string(&RowId::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&RowId::Text("0xdeadbeef-1".into())).unwrap(),
            "\"0xdeadbeef-1\""
        );
    }
}
