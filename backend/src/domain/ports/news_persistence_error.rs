//! Error type shared by the news repository ports.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by article, comment, user and topic adapters.
    pub enum NewsPersistenceError {
        /// Repository connection could not be established.
        Connection => "news repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "news repository query failed: {message}",
        /// A referenced article or user does not exist.
        ForeignKeyViolation => "referenced row does not exist: {message}",
        /// The database rejected a value, e.g. a missing required column.
        InvalidInput => "value rejected by the database: {message}",
    }
}
