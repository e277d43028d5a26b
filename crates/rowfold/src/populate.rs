use crate::Result;

use rowfold_core::err;
use rowfold_core::stmt::{GroupIndex, Value, ValueRecord};
use serde::{Deserialize, Serialize};

/// Describes how child rows fold into their parents.
///
/// Each parent row gains the attribute `alias`, a list holding every child row
/// whose match attribute equals the parent's `parent_pk` value. Attached
/// children have `fk_to_child` renamed to `child_pk`. Child rows with a missing
/// or falsy `fk_to_child` are dropped.
///
/// Folding never fails on key problems: a parent without a primary key, or a
/// child set without the expected attributes, simply yields empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Populate {
    /// Attribute added to each parent row
    pub alias: String,

    /// Primary key of the parent rows
    pub parent_pk: String,

    /// Attribute of a child row referencing the child table's key
    pub fk_to_child: String,

    /// Name `fk_to_child` is renamed to on attached children
    pub child_pk: String,

    /// Child attribute compared with the parent key. Defaults to `fk_to_child`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_on: Option<String>,
}

impl Populate {
    pub fn new(
        alias: impl Into<String>,
        parent_pk: impl Into<String>,
        fk_to_child: impl Into<String>,
        child_pk: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            parent_pk: parent_pk.into(),
            fk_to_child: fk_to_child.into(),
            child_pk: child_pk.into(),
            match_on: None,
        }
    }

    /// Many-to-many join rows: each row carries the parent's key under
    /// `parent_pk` and the child's key under `fk_to_child`.
    pub fn join_row(
        alias: impl Into<String>,
        parent_pk: impl Into<String>,
        fk_to_child: impl Into<String>,
        child_pk: impl Into<String>,
    ) -> Self {
        let parent_pk = parent_pk.into();
        Self::new(alias, parent_pk.clone(), fk_to_child, child_pk).match_on(parent_pk)
    }

    pub fn match_on(mut self, attr: impl Into<String>) -> Self {
        self.match_on = Some(attr.into());
        self
    }

    /// The child attribute compared with each parent's key.
    pub fn match_key(&self) -> &str {
        self.match_on.as_deref().unwrap_or(&self.fk_to_child)
    }

    pub fn fold(
        &self,
        mut parents: Vec<ValueRecord>,
        children: &[ValueRecord],
    ) -> Vec<ValueRecord> {
        self.fold_in_place(&mut parents, children);
        parents
    }

    /// Attaches children to `parents` without consuming them.
    ///
    /// `children` is only read; attached rows are copies.
    pub fn fold_in_place(&self, parents: &mut [ValueRecord], children: &[ValueRecord]) {
        let index = GroupIndex::new(children, self.match_key());
        let mut attached = 0;

        for parent in parents.iter_mut() {
            let nested = match parent.get(&self.parent_pk) {
                Some(pk) => self.nest(index.find(pk)),
                None => vec![],
            };

            attached += nested.len();
            parent.insert(self.alias.clone(), Value::List(nested));
        }

        log::debug!(
            "populated `{}`; parents={} children={} attached={}",
            self.alias,
            parents.len(),
            children.len(),
            attached
        );
    }

    /// JSON rows in, JSON rows out.
    ///
    /// Every row must be a JSON object holding only values a
    /// [`Value`] can represent; other rows fail the whole fold.
    pub fn fold_json(
        &self,
        parents: Vec<serde_json::Value>,
        children: &[serde_json::Value],
    ) -> Result<Vec<serde_json::Value>> {
        let parents = parents
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                ValueRecord::try_from(row).map_err(|e| e.context(err!("parent row {i}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let children = children
            .iter()
            .enumerate()
            .map(|(i, row)| {
                ValueRecord::try_from(row.clone()).map_err(|e| e.context(err!("child row {i}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self
            .fold(parents, &children)
            .into_iter()
            .map(serde_json::Value::from)
            .collect())
    }

    fn nest(&self, rows: &[&ValueRecord]) -> Vec<Value> {
        rows.iter()
            .filter_map(|row| {
                // Join rows without a key into the child table carry no child
                if !row[self.fk_to_child.as_str()].is_truthy() {
                    log::trace!(
                        "dropping join row without `{}` from `{}`",
                        self.fk_to_child,
                        self.alias
                    );
                    return None;
                }

                let mut child = (*row).clone();
                child.rename(&self.fk_to_child, &self.child_pk);
                Some(child.into())
            })
            .collect()
    }
}

/// Folds `children` into `parents` under `alias`.
///
/// Shorthand for [`Populate::new`] followed by [`Populate::fold`].
pub fn fold(
    parents: Vec<ValueRecord>,
    alias: &str,
    children: &[ValueRecord],
    parent_pk: &str,
    fk_to_child: &str,
    child_pk: &str,
) -> Vec<ValueRecord> {
    Populate::new(alias, parent_pk, fk_to_child, child_pk).fold(parents, children)
}
