use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use std::error::Error;
use std::fmt;

// Server error code shared by duplicate-key write and command failures.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Clone, PartialEq)]
pub enum DBErrorType {
  NoDocuments,
  DuplicateKey,
  BsonMarshal,
  BsonUnmarshal,
  Connection,
  Internal,
}

impl fmt::Display for DBErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DBErrorType::NoDocuments => write!(f, "no_documents"),
      DBErrorType::DuplicateKey => write!(f, "duplicate_key"),
      DBErrorType::BsonMarshal => write!(f, "bson_marshal"),
      DBErrorType::BsonUnmarshal => write!(f, "bson_unmarshal"),
      DBErrorType::Connection => write!(f, "connection_exception"),
      DBErrorType::Internal => write!(f, "internal_error"),
    }
  }
}

#[derive(Debug)]
pub struct DBError {
  pub err_type: DBErrorType,
  pub err: Option<Box<dyn Error + Send + Sync>>,
  pub msg: String,
  pub path: String,
  pub details: String,
}

impl fmt::Display for DBError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts = Vec::new();

    if !self.path.is_empty() {
      parts.push(format!("path: {}", self.path));
    }

    parts.push(format!("err_type: {}", self.err_type));

    if !self.msg.is_empty() {
      parts.push(format!("msg: {}", self.msg));
    }

    if !self.details.is_empty() {
      parts.push(format!("details: {}", self.details));
    }

    if let Some(ref err) = self.err {
      parts.push(format!("err: {}", err));
    }

    write!(f, "{}", parts.join(", "))
  }
}

impl Error for DBError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.err.as_ref().map(|e| &**e as &dyn Error)
  }
}

impl DBError {
  pub fn new(
    err_type: DBErrorType,
    err: Option<Box<dyn Error + Send + Sync>>,
    msg: impl Into<String>,
    path: impl Into<String>,
    details: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into(), details: details.into() }
  }
}

pub fn handle_db_error(err: MongoError, path: &str) -> DBError {
  let (err_type, msg) = match &*err.kind {
    ErrorKind::Write(WriteFailure::WriteError(write_err)) if write_err.code == DUPLICATE_KEY => {
      (DBErrorType::DuplicateKey, "a document with this key already exists")
    }
    ErrorKind::Command(cmd_err) if cmd_err.code == DUPLICATE_KEY => {
      (DBErrorType::DuplicateKey, "a document with this key already exists")
    }
    ErrorKind::ServerSelection { .. } => {
      (DBErrorType::Connection, "no reachable database server")
    }
    ErrorKind::Io(_) => (DBErrorType::Connection, "database connection exception"),
    ErrorKind::BsonSerialization(_) => {
      (DBErrorType::BsonMarshal, "failed to serialize document")
    }
    ErrorKind::BsonDeserialization(_) => {
      (DBErrorType::BsonUnmarshal, "failed to deserialize document")
    }
    _ => (DBErrorType::Internal, "database error"),
  };

  DBError::new(err_type, Some(Box::new(err)), msg, path, "")
}
