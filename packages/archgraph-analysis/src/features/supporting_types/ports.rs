use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::errors::{AnalysisError, Result};
use crate::features::supporting_types::domain::ComponentView;
use crate::features::type_repository::TypeRepository;

/// Capability: compute the supporting types of one component
///
/// The repository is bound once with [`set_type_repository`] before any
/// call; decorators forward it to the strategies they own. A call reads only
/// the shared repository, so one strategy can serve many components in
/// parallel.
///
/// [`set_type_repository`]: SupportingTypesStrategy::set_type_repository
pub trait SupportingTypesStrategy: Send + Sync + fmt::Debug {
    /// Strategy name for logs and error messages
    fn name(&self) -> &'static str;

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>);

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>>;

    /// Supporting types of `component`
    ///
    /// # Errors
    ///
    /// `NotConfigured` when no repository is bound, plus strategy-specific
    /// failures (`MalformedTypeName`, `TraversalLimitExceeded`).
    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>>;

    /// Bound repository or `NotConfigured`
    fn require_type_repository(&self) -> Result<&Arc<dyn TypeRepository>> {
        self.type_repository()
            .ok_or_else(|| AnalysisError::not_configured(self.name()))
    }
}
