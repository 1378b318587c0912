//! Topic data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subject area articles are filed under. Topics have no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    /// Primary key.
    #[schema(example = "mitch")]
    pub slug: String,
    /// Free text description.
    #[schema(example = "The man, the Mitch, the legend")]
    pub description: String,
}
