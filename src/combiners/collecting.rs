//! Combiners that gather or reshape values: `ToVec`, `Joining`, `Mapping`.

use super::CombineFn;

/// All values, in arrival order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec;

impl<V> CombineFn<V, Vec<V>, Vec<V>> for ToVec {
    fn create(&self) -> Vec<V> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<V>, v: V) {
        acc.push(v);
    }

    fn finish(&self, acc: Vec<V>) -> Vec<V> {
        acc
    }

    fn buffers_input(&self) -> bool {
        true
    }
}

/// Concatenate string values with a separator between neighbours.
///
/// No leading or trailing separator; an empty sequence gives `""`.
#[derive(Clone, Debug, Default)]
pub struct Joining {
    separator: String,
}

impl Joining {
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl<V> CombineFn<V, Option<String>, String> for Joining
where
    V: AsRef<str>,
{
    fn create(&self) -> Option<String> {
        None
    }

    fn add_input(&self, acc: &mut Option<String>, v: V) {
        match acc {
            Some(out) => {
                out.push_str(&self.separator);
                out.push_str(v.as_ref());
            }
            None => *acc = Some(v.as_ref().to_owned()),
        }
    }

    fn finish(&self, acc: Option<String>) -> String {
        acc.unwrap_or_default()
    }

    fn buffers_input(&self) -> bool {
        true
    }
}

/// Project each value with `F`, then hand it to the downstream combiner `C`.
///
/// `Mapping::new(|p: Person| p.name, ToVec)` collects names instead of people.
#[derive(Clone, Copy, Debug)]
pub struct Mapping<F, C> {
    project: F,
    downstream: C,
}

impl<F, C> Mapping<F, C> {
    pub const fn new(project: F, downstream: C) -> Self {
        Self {
            project,
            downstream,
        }
    }
}

impl<V, U, A, O, F, C> CombineFn<V, A, O> for Mapping<F, C>
where
    F: Fn(V) -> U,
    C: CombineFn<U, A, O>,
{
    fn create(&self) -> A {
        self.downstream.create()
    }

    fn add_input(&self, acc: &mut A, v: V) {
        self.downstream.add_input(acc, (self.project)(v));
    }

    fn finish(&self, acc: A) -> O {
        self.downstream.finish(acc)
    }

    fn buffers_input(&self) -> bool {
        self.downstream.buffers_input()
    }
}
