//! The demonstration coven: root sired a and b, b sired c

use bloodline::application::LineageService;
use bloodline::config::Settings;
use bloodline::domain::{demo_coven, Coven, VampireId};
use rstest::{fixture, rstest};

struct Demo {
    coven: Coven,
    root: VampireId,
    a: VampireId,
    b: VampireId,
    c: VampireId,
}

#[fixture]
fn demo() -> Demo {
    let coven = demo_coven().unwrap();
    let root = coven.originals()[0];
    let a = coven.vampire_with_name(root, "a").unwrap();
    let b = coven.vampire_with_name(root, "b").unwrap();
    let c = coven.vampire_with_name(root, "c").unwrap();
    Demo { coven, root, a, b, c }
}

#[rstest]
fn given_demo_when_common_ancestor_of_c_and_b_then_b(demo: Demo) {
    assert_eq!(demo.coven.closest_common_ancestor(demo.c, demo.b).unwrap(), demo.b);
}

#[rstest]
fn given_demo_when_common_ancestor_of_a_and_c_then_root(demo: Demo) {
    assert_eq!(demo.coven.closest_common_ancestor(demo.a, demo.c).unwrap(), demo.root);
}

#[rstest]
fn given_demo_when_counting_descendants_then_three(demo: Demo) {
    assert_eq!(demo.coven.total_descendents(demo.root).unwrap(), 3);
}

#[rstest]
fn given_demo_when_searching_c_then_found(demo: Demo) {
    assert_eq!(demo.coven.vampire_with_name(demo.root, "c").unwrap(), demo.c);
}

#[rstest]
fn given_demo_when_c_is_leaf_then_empty_queries(demo: Demo) {
    assert_eq!(demo.coven.total_descendents(demo.c).unwrap(), 0);
    assert!(demo.coven.all_millennial_vampires(demo.c).unwrap().is_empty());
    assert!(demo.coven.lineage_contains(demo.c, demo.c).unwrap());
}

#[rstest]
fn given_service_when_seniority_of_a_and_c_then_a_is_more_senior() {
    let service = LineageService::new(demo_coven().unwrap(), Settings::default());

    let seniority = service.seniority("a", "c").unwrap();

    assert_eq!(seniority.left_distance, 1);
    assert_eq!(seniority.right_distance, 2);
    assert!(seniority.left_is_more_senior);
}

#[rstest]
fn given_service_when_census_of_original_then_two_offspring_three_descendants() {
    let service = LineageService::new(demo_coven().unwrap(), Settings::default());

    let census = service.census(None).unwrap();

    assert_eq!(census.name, "root");
    assert_eq!(census.offspring, 2);
    assert_eq!(census.descendants, 3);
}

#[rstest]
fn given_default_settings_when_millennials_then_b_and_c() {
    let service = LineageService::new(demo_coven().unwrap(), Settings::default());

    let millennials = service.millennials(None).unwrap();
    let names: Vec<_> = millennials.vampires.iter().map(|v| v.name.clone()).collect();

    assert_eq!(millennials.year, 1980);
    assert_eq!(names, vec!["b", "c"]);
}

#[rstest]
fn given_hidden_years_when_render_then_names_only() {
    let settings = Settings {
        show_years: false,
        ..Settings::default()
    };
    let service = LineageService::new(demo_coven().unwrap(), settings);

    assert_eq!(service.render().unwrap(), vec!["root\n├── a\n└── b\n    └── c\n"]);
}
