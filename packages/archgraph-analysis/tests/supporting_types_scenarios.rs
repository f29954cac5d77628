//! Scenarios for the supporting-type strategies over shared fixtures

mod common;

use std::sync::Arc;

use archgraph_analysis::features::supporting_types::{
    AllTypesUnderPackageSupportingTypesStrategy, AnnotationTypeMatcher, ComponentView,
    CompositeSupportingTypesStrategy, ExplicitTypesSupportingTypesStrategy,
    MatchingTypesSupportingTypesStrategy, ReferencedTypesInSamePackageSupportingTypesStrategy,
    ReferencedTypesSupportingTypesStrategy, SupportingTypesStrategy,
};
use archgraph_analysis::features::type_repository::InMemoryTypeRepository;
use archgraph_analysis::{ErrorKind, PackageScope};
use common::{banking_repository, cycle_repository, scenario_repository, set};
use pretty_assertions::assert_eq;

fn bound<S: SupportingTypesStrategy>(mut strategy: S, repository: Arc<dyn archgraph_analysis::TypeRepository>) -> S {
    strategy.set_type_repository(repository);
    strategy
}

// ═══════════════════════════════════════════════════════════════════════════
// Referenced types
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_closure() {
    let strategy = bound(ReferencedTypesSupportingTypesStrategy::default(), scenario_repository());
    let types = strategy
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap();
    assert_eq!(types, set(&["pkg.B", "pkg.D", "pkg.other.C"]));
}

#[test]
fn test_scenario_direct_only() {
    let strategy = bound(ReferencedTypesSupportingTypesStrategy::new(false), scenario_repository());
    let types = strategy
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap();
    assert_eq!(types, set(&["pkg.B", "pkg.other.C"]));
}

#[test]
fn test_scenario_closure_with_sibling_on_c() {
    let strategy = bound(ReferencedTypesSupportingTypesStrategy::default(), scenario_repository());
    let view = ComponentView::new("A", "pkg.A").with_siblings(["pkg.other.C"]);
    assert_eq!(
        strategy.find_supporting_types(&view).unwrap(),
        set(&["pkg.B", "pkg.D"])
    );
}

#[test]
fn test_cycle_terminates_without_primary_type() {
    let strategy = bound(ReferencedTypesSupportingTypesStrategy::default(), cycle_repository());
    let types = strategy
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap();
    assert_eq!(types, set(&["pkg.B"]));
}

#[test]
fn test_direct_equals_indirect_for_leaf_references() {
    let repository: Arc<dyn archgraph_analysis::TypeRepository> =
        Arc::new(InMemoryTypeRepository::from_edges([("pkg.A", vec!["pkg.L1", "pkg.L2"])]));
    let view = ComponentView::new("A", "pkg.A");

    let direct = bound(ReferencedTypesSupportingTypesStrategy::new(false), Arc::clone(&repository));
    let indirect = bound(ReferencedTypesSupportingTypesStrategy::new(true), repository);

    assert_eq!(
        direct.find_supporting_types(&view).unwrap(),
        indirect.find_supporting_types(&view).unwrap()
    );
}

#[test]
fn test_unknown_primary_type_has_no_supporting_types() {
    for include_indirect in [true, false] {
        let strategy = bound(
            ReferencedTypesSupportingTypesStrategy::new(include_indirect),
            scenario_repository(),
        );
        let types = strategy
            .find_supporting_types(&ComponentView::new("Z", "pkg.Z"))
            .unwrap();
        assert!(types.is_empty());
    }
}

#[test]
fn test_deep_sibling_excluded() {
    let strategy = bound(ReferencedTypesSupportingTypesStrategy::default(), banking_repository());
    let view = ComponentView::new("Accounts", "com.bank.accounts.AccountsController")
        .with_siblings(["com.bank.payments.PaymentsController"]);

    let types = strategy.find_supporting_types(&view).unwrap();
    assert!(!types.contains("com.bank.payments.PaymentsController"));
    // Traversal passes through the sibling; its references are still reached
    assert!(types.contains("com.bank.payments.PaymentGateway"));
}

#[test]
fn test_unconfigured_strategy() {
    let err = ReferencedTypesSupportingTypesStrategy::default()
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotConfigured);
}

#[test]
fn test_traversal_cap() {
    let strategy = bound(
        ReferencedTypesSupportingTypesStrategy::default().with_max_traversal_nodes(2),
        scenario_repository(),
    );
    let err = strategy
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::TraversalLimitExceeded);
    assert_eq!(err.subject.as_deref(), Some("pkg.A"));
}

// ═══════════════════════════════════════════════════════════════════════════
// Same package
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_same_package() {
    let strategy = bound(
        ReferencedTypesInSamePackageSupportingTypesStrategy::default(),
        scenario_repository(),
    );
    let types = strategy
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap();
    assert_eq!(types, set(&["pkg.B", "pkg.D"]));
}

#[test]
fn test_scenario_same_package_with_sibling_on_c() {
    let strategy = bound(
        ReferencedTypesInSamePackageSupportingTypesStrategy::default(),
        scenario_repository(),
    );
    let view = ComponentView::new("A", "pkg.A").with_siblings(["pkg.other.C"]);
    assert_eq!(
        strategy.find_supporting_types(&view).unwrap(),
        set(&["pkg.B", "pkg.D"])
    );
}

#[test]
fn test_same_package_subpackages_scope() {
    let strategy = bound(
        ReferencedTypesInSamePackageSupportingTypesStrategy::default()
            .with_scope(PackageScope::Subpackages),
        scenario_repository(),
    );
    let types = strategy
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap();
    assert_eq!(types, set(&["pkg.B", "pkg.D", "pkg.other.C"]));
}

#[test]
fn test_same_package_unconfigured() {
    let err = ReferencedTypesInSamePackageSupportingTypesStrategy::default()
        .find_supporting_types(&ComponentView::new("A", "pkg.A"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotConfigured);
}

// ═══════════════════════════════════════════════════════════════════════════
// Other variants
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_annotated_repository_types() {
    let strategy = bound(
        MatchingTypesSupportingTypesStrategy::new(
            Box::new(ReferencedTypesSupportingTypesStrategy::default()),
            Box::new(AnnotationTypeMatcher::new("Repository")),
        ),
        banking_repository(),
    );
    let view = ComponentView::new("Accounts", "com.bank.accounts.AccountsController");
    assert_eq!(
        strategy.find_supporting_types(&view).unwrap(),
        set(&["com.bank.accounts.AccountDao"])
    );
}

#[test]
fn test_composite_of_package_and_explicit() {
    let strategy = bound(
        CompositeSupportingTypesStrategy::new()
            .with_strategy(Box::new(AllTypesUnderPackageSupportingTypesStrategy::new()))
            .with_strategy(Box::new(
                ExplicitTypesSupportingTypesStrategy::new().include(["com.bank.util.Json"]),
            )),
        banking_repository(),
    );
    let view = ComponentView::new("Accounts", "com.bank.accounts.AccountsController");

    assert_eq!(
        strategy.find_supporting_types(&view).unwrap(),
        set(&[
            "com.bank.accounts.AccountDao",
            "com.bank.accounts.AccountMapper",
            "com.bank.accounts.AccountRow",
            "com.bank.util.Json",
        ])
    );
}
