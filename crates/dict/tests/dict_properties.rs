use anyhow::Result;
use dict::{Dict, DictError};

fn sample() -> Result<Dict<i32>> {
    Ok(Dict::from_entries([("a", 1), ("b", 2), ("c", 3)])?)
}

#[test]
fn set_makes_key_visible() -> Result<()> {
    let mut d = Dict::new();
    for (k, v) in [("alpha", 1), ("toString", 2), ("valueOf", 3), ("0", 4)] {
        d.set(k, v)?;
        assert!(d.has(k));
        assert_eq!(d.get(k), Some(&v));
    }
    assert_eq!(d.len(), 4);
    Ok(())
}

#[test]
fn set_on_present_key_replaces() -> Result<()> {
    let mut d = Dict::new();
    d.set("k", 1)?.set("k", 2)?;
    assert_eq!(d.len(), 1);
    assert_eq!(d.get("k"), Some(&2));
    Ok(())
}

#[test]
fn falsy_set_leaves_dict_untouched() -> Result<()> {
    let mut d = sample()?;
    let before = d.to_object();
    assert!(matches!(d.set("", 0), Err(DictError::InvalidKey(_))));
    assert!(matches!(d.set(0_i64, 0), Err(DictError::InvalidKey(_))));
    assert_eq!(d.len(), 3);
    assert_eq!(d.to_object(), before);
    Ok(())
}

#[test]
fn removing_absent_key_keeps_length() -> Result<()> {
    let mut d = sample()?;
    let before = d.len();
    d.remove("nope");
    assert_eq!(d.len(), before);
    Ok(())
}

#[test]
fn require_matches_get() -> Result<()> {
    let d = sample()?;
    assert_eq!(d.require("a")?, d.get("a").unwrap_or(&-1));
    let err = d.require("missing").unwrap_err();
    assert_eq!(err, DictError::MissingKey("missing".into()));
    assert_eq!(err.to_string(), "required key 'missing' does not exist");
    Ok(())
}

#[test]
fn clone_is_independent() -> Result<()> {
    let original = sample()?;
    let mut copy = original.clone();
    assert_eq!(copy.to_object(), original.to_object());

    copy.set("x", 1)?.remove("a");
    assert!(!original.has("x"));
    assert!(original.has("a"));
    assert_eq!(original.len(), 3);
    Ok(())
}

#[test]
fn join_prefers_other_and_leaves_inputs() -> Result<()> {
    let a = Dict::from_entries([("shared", 1), ("left", 2)])?;
    let b = Dict::from_entries([("shared", 10), ("right", 20)])?;
    let (a_before, b_before) = (a.to_object(), b.to_object());

    let joined = a.join(&b);
    assert_eq!(a.to_object(), a_before);
    assert_eq!(b.to_object(), b_before);
    for key in b.keys() {
        assert_eq!(joined.get(&key), b.get(&key));
    }
    assert_eq!(joined.get("left"), Some(&2));
    assert_eq!(joined.len(), 3);
    Ok(())
}

#[test]
fn add_map_mutates_receiver() -> Result<()> {
    let mut a = Dict::from_entries([("x", 1)])?;
    let b = Dict::from_entries([("x", 2), ("y", 3)])?;
    a.add_map(&b).set("z", 4)?;
    assert_eq!(a.keys(), vec!["x", "y", "z"]);
    assert_eq!(a.values(), vec![2, 3, 4]);
    Ok(())
}

#[test]
fn map_and_filter_do_not_touch_receiver() -> Result<()> {
    let d = sample()?;
    let doubled = d.map(|v, _, _| v * 2);
    let odd = d.filter(|v, _, _| v % 2 == 1);
    assert_eq!(d.len(), 3);
    assert_eq!(d.values(), vec![1, 2, 3]);
    assert_eq!(doubled.values(), vec![2, 4, 6]);
    assert_eq!(odd.keys(), vec!["a", "c"]);
    Ok(())
}

#[test]
fn reduce_sums_and_orders() -> Result<()> {
    let d = sample()?;
    assert_eq!(d.reduce(|acc, v, _, _| acc + v, 0), 6);

    let mut order = Vec::new();
    d.for_each(|_, k, _| order.push(k.to_string()));
    let folded = d.reduce(|mut acc: Vec<String>, _, k, _| {
        acc.push(k.to_string());
        acc
    }, Vec::new());
    assert_eq!(folded, order);
    Ok(())
}

#[test]
fn filter_then_to_object() -> Result<()> {
    let d = Dict::from_entries([("a", 1), ("b", 2)])?;
    let object = d.filter(|v, _, _| *v > 1).to_object();
    assert_eq!(object.len(), 1);
    assert_eq!(object.get("b"), Some(&2));
    Ok(())
}

#[test]
fn set_then_map() -> Result<()> {
    let mut d = Dict::new();
    let mapped = d.set("x", 1)?.map(|v, _, _| v * 10);
    assert_eq!(mapped.get("x"), Some(&10));
    Ok(())
}

#[test]
fn for_each_without_callback_is_invalid_argument() -> Result<()> {
    let d = sample()?;
    let result = d.try_for_each(None::<fn(&i32, &str, &Dict<i32>)>);
    assert!(matches!(result, Err(DictError::InvalidArgument)));
    Ok(())
}

#[test]
fn snapshots_do_not_follow_mutation() -> Result<()> {
    let mut d = sample()?;
    let keys = d.keys();
    let values = d.values();
    let object = d.to_object();
    d.clear().set("q", 9)?;
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(object.len(), 3);
    assert_eq!(d.len(), 1);
    Ok(())
}

#[test]
fn registry_lookup_by_stringified_keys() -> Result<()> {
    let mut ports: Dict<&str> = Dict::new();
    ports.set(80_u16, "http")?.set(443_u16, "https")?;
    assert_eq!(ports.require(443_u16)?, &"https");
    assert_eq!(ports.require("80")?, &"http");
    assert!(ports.require(22_u16).is_err());
    Ok(())
}
