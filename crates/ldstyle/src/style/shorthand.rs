//! Property aliases and spacing shorthands.
//!
//! Before any value is transformed, input keys are rewritten to canonical
//! longhand names:
//!
//! | Input | Output |
//! |-------|--------|
//! | `p` / `m` | `padding` / `margin` |
//! | `px` / `mx` | `paddingLeft` + `paddingRight` / `marginLeft` + `marginRight` |
//! | `py` / `my` | `paddingTop` + `paddingBottom` / `marginTop` + `marginBottom` |
//! | `pt` `pr` `pb` `pl` | `paddingTop` `paddingRight` `paddingBottom` `paddingLeft` |
//! | `mt` `mr` `mb` `ml` | `marginTop` `marginRight` `marginBottom` `marginLeft` |
//! | `bgcolor`, `bg` | `backgroundColor` |
//! | `radius` | `borderRadius` |
//! | `shadow` | `boxShadow` |
//!
//! Every target receives the same source value, so a shorthand carrying a
//! responsive map or a token is expanded intact and transformed afterwards.
//!
//! # Precedence
//!
//! When several keys write the same longhand, the more specific one wins no
//! matter where it is declared:
//!
//! explicit longhand > single side (`pl`) > axis (`px`) > all sides (`p`) > alias
//!
//! Between keys of equal specificity the later declaration wins.

use std::collections::HashMap;

use serde_json::Value;

use super::StyleObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Specificity {
    Alias,
    AllSides,
    Axis,
    Side,
    Explicit,
}

const SHORTHANDS: &[(&str, Specificity, &[&str])] = &[
    ("p", Specificity::AllSides, &["padding"]),
    ("px", Specificity::Axis, &["paddingLeft", "paddingRight"]),
    ("py", Specificity::Axis, &["paddingTop", "paddingBottom"]),
    ("pt", Specificity::Side, &["paddingTop"]),
    ("pr", Specificity::Side, &["paddingRight"]),
    ("pb", Specificity::Side, &["paddingBottom"]),
    ("pl", Specificity::Side, &["paddingLeft"]),
    ("m", Specificity::AllSides, &["margin"]),
    ("mx", Specificity::Axis, &["marginLeft", "marginRight"]),
    ("my", Specificity::Axis, &["marginTop", "marginBottom"]),
    ("mt", Specificity::Side, &["marginTop"]),
    ("mr", Specificity::Side, &["marginRight"]),
    ("mb", Specificity::Side, &["marginBottom"]),
    ("ml", Specificity::Side, &["marginLeft"]),
    ("bgcolor", Specificity::Alias, &["backgroundColor"]),
    ("bg", Specificity::Alias, &["backgroundColor"]),
    ("radius", Specificity::Alias, &["borderRadius"]),
    ("shadow", Specificity::Alias, &["boxShadow"]),
];

/// Returns `true` if `key` is a shorthand or alias rewritten by [`expand`].
pub fn is_shorthand(key: &str) -> bool {
    lookup(key).is_some()
}

/// Rewrites shorthand and alias keys of one object level into longhands.
///
/// Nested objects are not descended into; `null` values are dropped. Each
/// output key sits at the position of the first input key that produced it.
pub fn expand(obj: StyleObject) -> StyleObject {
    let mut expansion = Expansion::default();
    for (key, value) in obj {
        if value.is_null() {
            continue;
        }
        match lookup(&key) {
            Some((specificity, targets)) => {
                for target in targets {
                    expansion.assign(target, specificity, &value);
                }
            }
            None => expansion.assign(&key, Specificity::Explicit, &value),
        }
    }
    expansion.out
}

fn lookup(key: &str) -> Option<(Specificity, &'static [&'static str])> {
    SHORTHANDS
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|&(_, specificity, targets)| (specificity, targets))
}

#[derive(Default)]
struct Expansion {
    out: StyleObject,
    written: HashMap<String, Specificity>,
}

impl Expansion {
    fn assign(&mut self, target: &str, specificity: Specificity, value: &Value) {
        if let Some(&existing) = self.written.get(target) {
            if existing > specificity {
                return;
            }
        }
        self.written.insert(target.to_string(), specificity);
        self.out.insert(target.to_string(), value.clone());
    }
}
