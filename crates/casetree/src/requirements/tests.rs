use super::*;
use casetree_decl::DeclMap;

fn block(entries: &[(&str, Declaration)]) -> Declaration {
    Declaration::Map(entries.iter().cloned().collect())
}

#[test]
fn all_requires_every_truthy_feature() {
    let decl = block(&[("featureA", true.into()), ("featureB", true.into())]);
    let req = Requirements::new(RequirementMode::All, &decl);

    let both: FeatureSet = ["featureA", "featureB"].into_iter().collect();
    let one: FeatureSet = ["featureA"].into_iter().collect();

    assert!(req.is_satisfied_by(&both));
    assert!(!req.is_satisfied_by(&one));
}

#[test]
fn any_requires_one_truthy_feature() {
    let decl = block(&[("featureA", true.into()), ("featureB", true.into())]);
    let req = Requirements::new(RequirementMode::Any, &decl);

    let one: FeatureSet = ["featureB"].into_iter().collect();
    assert!(req.is_satisfied_by(&one));
    assert!(!req.is_satisfied_by(&FeatureSet::new()));
}

#[test]
fn falsy_flags_are_not_required() {
    let decl = block(&[
        ("featureA", false.into()),
        ("featureB", Declaration::Null),
        ("featureC", 0.into()),
        ("featureD", 1.into()),
    ]);
    let req = Requirements::new(RequirementMode::All, &decl);

    assert_eq!(req.required_features().collect::<Vec<_>>(), vec!["featureD"]);
    let d: FeatureSet = ["featureD"].into_iter().collect();
    assert!(req.is_satisfied_by(&d));
}

#[test]
fn empty_blocks_are_satisfied() {
    let empty = Declaration::Map(DeclMap::new());
    let none = FeatureSet::new();

    assert!(Requirements::new(RequirementMode::All, &empty).is_satisfied_by(&none));
    assert!(Requirements::new(RequirementMode::Any, &empty).is_satisfied_by(&none));
}

#[test]
fn non_mapping_block_requires_nothing() {
    let decl = Declaration::from("featureA");
    let req = Requirements::new(RequirementMode::All, &decl);

    assert_eq!(req.required_features().count(), 0);
    assert!(req.is_satisfied_by(&FeatureSet::new()));
}

#[test]
fn describe_lists_required_features() {
    let decl = block(&[("featureA", true.into()), ("featureB", true.into())]);

    assert_eq!(
        Requirements::new(RequirementMode::All, &decl).describe(),
        "requires support for all of: featureA, featureB"
    );
    assert_eq!(
        Requirements::new(RequirementMode::Any, &decl).describe(),
        "requires support for any of: featureA, featureB"
    );
}

#[test]
fn std_sets_provide_support() {
    let decl = block(&[("featureA", true.into())]);
    let req = Requirements::new(RequirementMode::All, &decl);

    let hash: HashSet<String> = ["featureA".to_owned()].into_iter().collect();
    let btree: BTreeSet<String> = ["featureA".to_owned()].into_iter().collect();

    assert!(req.is_satisfied_by(&hash));
    assert!(req.is_satisfied_by(&btree));
}

#[test]
fn feature_set_insert_and_lookup() {
    let mut set = FeatureSet::new();
    assert!(set.is_empty());
    assert!(set.insert("featureA"));
    assert!(!set.insert("featureA"));
    assert_eq!(set.len(), 1);
    assert!(set.supports("featureA"));
    assert!(!set.supports("featureB"));
}

#[test]
fn closures_provide_support() {
    let decl = block(&[("featureA", true.into()), ("featureB", true.into())]);
    let all = Requirements::new(RequirementMode::All, &decl);
    let any = Requirements::new(RequirementMode::Any, &decl);

    let only_a = |feature: &str| feature == "featureA";
    assert!(!all.is_satisfied_by(&only_a));
    assert!(any.is_satisfied_by(&only_a));
    assert!(all.is_satisfied_by(&|_: &str| true));
    assert!(!any.is_satisfied_by(&|_: &str| false));
}
