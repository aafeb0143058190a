//! Generic query surface bound to one core

use super::{lookup, Core};
use crate::context::ExecutionContext;
use crate::error::{ClientError, Result};
use crate::options::QueryOptions;
use crate::rql::{self, Fragment};
use crate::runner;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;

/// Query handle for a single core.
///
/// Every method builds a filter with [`crate::rql`] and issues one
/// [`runner::run`] call.
#[derive(Debug, Clone)]
pub struct Resource {
    core: Core,
    ctx: Arc<ExecutionContext>,
}

impl Resource {
    pub fn new(core: Core, ctx: Arc<ExecutionContext>) -> Self {
        Self { core, ctx }
    }

    pub fn core(&self) -> Core {
        self.core
    }

    /// Run an arbitrary filter against this core
    pub async fn query(&self, filter: impl AsRef<str>, options: &QueryOptions) -> Result<Value> {
        runner::run(self.core.as_str(), filter, options, &self.ctx).await
    }

    /// Run an arbitrary filter and decode into `T`
    pub async fn query_as<T: DeserializeOwned>(
        &self,
        filter: impl AsRef<str>,
        options: &QueryOptions,
    ) -> Result<T> {
        runner::run_as(self.core.as_str(), filter, options, &self.ctx).await
    }

    /// Records matching every `field = value` pair, in the given order
    pub async fn where_eq<I, K, V>(&self, criteria: I, options: &QueryOptions) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let filter = rql::build_and_from(criteria);
        self.query(filter, options).await
    }

    /// Record(s) whose primary key equals `id`
    pub async fn get(&self, id: impl Display, options: &QueryOptions) -> Result<Value> {
        let filter = rql::eq(self.core.primary_key(), id);
        self.query(filter, options).await
    }

    /// Records where the field behind lookup name `name` equals `value`
    pub async fn get_by(
        &self,
        name: &str,
        value: impl Display,
        options: &QueryOptions,
    ) -> Result<Value> {
        let filter = rql::eq(self.field(name)?, value);
        self.query(filter, options).await
    }

    /// Records where the field behind `name` is any of `values`
    pub async fn get_by_any<I>(&self, name: &str, values: I, options: &QueryOptions) -> Result<Value>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let filter = rql::in_(self.field(name)?, values);
        self.query(filter, options).await
    }

    /// Records with `start_field > start` and `end_field < end`
    pub async fn in_range(
        &self,
        start_field: &str,
        end_field: &str,
        start: impl Display,
        end: impl Display,
        options: &QueryOptions,
    ) -> Result<Value> {
        let filter = rql::and([rql::gt(start_field, start), rql::lt(end_field, end)]);
        self.query(filter, options).await
    }

    /// Filter for a lookup, without running it
    pub fn filter_for(&self, name: &str, value: impl Display) -> Result<Fragment> {
        Ok(rql::eq(self.field(name)?, value))
    }

    fn field(&self, name: &str) -> Result<&'static str> {
        lookup::resolve_field(self.core, name).ok_or_else(|| ClientError::UnknownLookup {
            name: name.to_string(),
            core: self.core.to_string(),
            available: lookup::lookup_names(self.core).join(", "),
        })
    }
}
