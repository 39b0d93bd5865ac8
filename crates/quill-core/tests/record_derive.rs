use quill_core::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Record)]
pub struct Person {
    pub title: Option<String>,
    pub name: String,
    secret: String,
}

#[derive(Record)]
pub struct Address {
    pub city: String,
    pub zip: Option<String>,
}

#[derive(Record)]
pub struct Customer {
    #[record(rename = "customer-name")]
    pub name: String,
    #[record(flatten)]
    pub address: Address,
    #[record(skip)]
    pub notes: String,
    pub tags: Vec<String>,
    pub balance: f64,
}

#[derive(Record)]
pub struct Empty;

#[derive(Record)]
#[allow(dead_code)]
pub struct OnlyPrivate {
    hidden: String,
}

#[derive(Record)]
pub struct Wrapper<T> {
    pub inner: T,
}

#[test]
fn test_person_greeting() {
    init_tracing();
    let typed =
        make_typed_template::<Person>("Hello, {title:Buana} {name}!", TemplateConfig::default())
            .unwrap();

    let person = Person {
        title: None,
        name: "Matteo".into(),
        secret: "hunter2".into(),
    };
    assert_eq!(typed.render(&person).unwrap(), "Hello, Buana Matteo!");
    assert!(!typed.context_for(&person).contains_key("secret"));
    assert_eq!(person.secret, "hunter2");
}

#[test]
fn test_private_fields_are_not_readable() {
    let names: Vec<String> = Person::fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(names, vec!["title", "name"]);

    let err = make_typed_template::<OnlyPrivate>("{hidden}", TemplateConfig::default())
        .unwrap_err();
    assert!(matches!(
        err.as_definition(),
        Some(DefinitionError::NoReadableFields { type_name }) if type_name == "OnlyPrivate"
    ));
}

#[test]
fn test_unit_struct_has_no_readable_fields() {
    let err = make_typed_template::<Empty>("{x}", TemplateConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        QuillError::Definition(DefinitionError::NoReadableFields { .. })
    ));
}

#[test]
fn test_rename_flatten_and_skip() {
    init_tracing();
    let config = TemplateConfig::default()
        .with_separator("/")
        .with_number_format(NumberFormat::Cents)
        .with_global_default("-");
    let typed = make_typed_template::<Customer>(
        "{customer-name} ({city}, {zip}) [{tags}] {balance} {notes}",
        config,
    )
    .unwrap();

    let customer = Customer {
        name: "Ada".into(),
        address: Address {
            city: "London".into(),
            zip: None,
        },
        notes: "not rendered".into(),
        tags: vec!["vip".into(), "eu".into()],
        balance: 10.125,
    };

    assert_eq!(
        typed.render(&customer).unwrap(),
        "Ada (London, -) [vip/eu] 10.12 -"
    );
}

#[test]
fn test_no_matching_fields() {
    let err = make_typed_template::<Address>("{street}", TemplateConfig::default()).unwrap_err();
    assert!(matches!(
        err.as_definition(),
        Some(DefinitionError::NoMatchingFields { fields, .. })
            if fields == &vec!["city".to_string(), "zip".to_string()]
    ));
}

#[test]
fn test_generic_record() {
    let typed = make_typed_template::<Wrapper<i64>>("n={inner}", TemplateConfig::default())
        .unwrap();
    assert_eq!(typed.render(&Wrapper { inner: 42 }).unwrap(), "n=42");
}

#[test]
fn test_one_template_many_views() {
    let template = Arc::new(Template::new("{name} lives in {city}").unwrap());
    let people = TypedTemplate::<Person>::new(Arc::clone(&template)).unwrap();
    let places = TypedTemplate::<Address>::new(Arc::clone(&template)).unwrap();

    let person = Person {
        title: None,
        name: "Bo".into(),
        secret: String::new(),
    };
    let address = Address {
        city: "Oslo".into(),
        zip: Some("0150".into()),
    };
    assert_eq!(people.render(&person).unwrap(), "Bo lives in ");
    assert_eq!(places.render(&address).unwrap(), " lives in Oslo");

    let mut extra = BTreeMap::new();
    extra.insert("city".to_string(), "Bergen");
    let ctx = Context::new().with("name", "Bo").with("meta", extra);
    assert_eq!(template.render(&ctx).unwrap(), "Bo lives in ");
}

#[test]
fn test_typed_render_is_concurrent() {
    let typed = Arc::new(
        make_typed_template::<Address>("{city}:{zip:none}", TemplateConfig::default()).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let typed = Arc::clone(&typed);
            std::thread::spawn(move || {
                let address = Address {
                    city: format!("c{}", i),
                    zip: None,
                };
                typed.render(&address).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("c{}:none", i));
    }
}
