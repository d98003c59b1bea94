//! # Property Options
//!
//! Hosts ask for the selectable options of a form property by sending a
//! [`PropertyOptionsRequest`] through an ordered chain of handlers. Each
//! handler receives the request produced by the previous one and may fill in
//! the options; once they are set, later handlers leave them alone.
//!
//! [`resolve_property_options`] is the handler answering requests for
//! MetaModel items from the attribute named by the property:
//!
//! 1. Options already resolved → request returned unchanged.
//! 2. Model is not backed by a MetaModel item → unchanged.
//! 3. Item has no attribute with the property's name → unchanged.
//! 4. Otherwise options = `attribute.filter_options(None, false)`.
//!
//! A failing attribute never fails the request: its error is turned into a
//! single placeholder option reading `Error: <message>`.

use crate::model::{FilterOption, Item};
use std::fmt;
use tracing::{debug, warn};

/// Models handed to option handlers by the host.
///
/// Only models backed by a MetaModel item are answered by
/// [`resolve_property_options`]; everything else returns `None`.
pub trait DataModel {
    fn item(&self) -> Option<&Item>;
}

/// Host model wrapping one MetaModel item.
#[derive(Debug, Clone)]
pub struct ItemModel {
    item: Item,
}

impl ItemModel {
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

impl DataModel for ItemModel {
    fn item(&self) -> Option<&Item> {
        Some(&self.item)
    }
}

/// Request for the options of `property_name` on `model`.
pub struct PropertyOptionsRequest<'m> {
    pub model: &'m dyn DataModel,
    pub property_name: String,
    pub options: Option<Vec<FilterOption>>,
}

impl<'m> PropertyOptionsRequest<'m> {
    pub fn new(model: &'m dyn DataModel, property_name: impl Into<String>) -> Self {
        Self {
            model,
            property_name: property_name.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = Some(options);
        self
    }
}

impl fmt::Debug for PropertyOptionsRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyOptionsRequest")
            .field("property_name", &self.property_name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Fill in the options of a MetaModel property from its attribute.
pub fn resolve_property_options(
    mut request: PropertyOptionsRequest<'_>,
) -> PropertyOptionsRequest<'_> {
    if request.options.is_some() {
        return request;
    }
    let model = request.model;
    let Some(item) = model.item() else {
        return request;
    };
    let Some(attribute) = item.attribute(&request.property_name) else {
        return request;
    };

    let options = match attribute.filter_options(None, false) {
        Ok(options) => {
            debug!(
                attribute = attribute.name(),
                count = options.len(),
                "resolved property options"
            );
            options
        }
        Err(err) => {
            warn!(
                attribute = attribute.name(),
                error = %err,
                "failed to resolve property options"
            );
            vec![FilterOption::placeholder(format!("Error: {}", err))]
        }
    };
    request.options = Some(options);
    request
}

type OptionsHandler =
    Box<dyn for<'m> Fn(PropertyOptionsRequest<'m>) -> PropertyOptionsRequest<'m>>;

/// Ordered list of option handlers, run in registration order.
#[derive(Default)]
pub struct OptionsHandlerChain {
    handlers: Vec<OptionsHandler>,
}

impl OptionsHandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: for<'m> Fn(PropertyOptionsRequest<'m>) -> PropertyOptionsRequest<'m> + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch<'m>(
        &self,
        request: PropertyOptionsRequest<'m>,
    ) -> PropertyOptionsRequest<'m> {
        self.handlers
            .iter()
            .fold(request, |request, handler| handler(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::testing::{Call, CallLog, RecordingAttribute};
    use crate::model::MetaModel;
    use std::rc::Rc;

    struct ForeignModel;

    impl DataModel for ForeignModel {
        fn item(&self) -> Option<&Item> {
            None
        }
    }

    fn model_with(attribute: RecordingAttribute) -> (ItemModel, CallLog) {
        let log = attribute.log();
        let metamodel = Rc::new(MetaModel::new("products").with_attribute(attribute));
        (ItemModel::new(Item::new(1, metamodel)), log)
    }

    #[test]
    fn resolves_options_from_attribute() {
        let options = vec![FilterOption::new("1", "One"), FilterOption::new("2", "Two")];
        let (model, _) = model_with(RecordingAttribute::new("size").with_options(options.clone()));

        let request = resolve_property_options(PropertyOptionsRequest::new(&model, "size"));
        assert_eq!(request.options, Some(options));
    }

    #[test]
    fn asks_for_all_values_without_id_restriction() {
        let (model, log) = model_with(RecordingAttribute::new("size"));
        resolve_property_options(PropertyOptionsRequest::new(&model, "size"));
        assert_eq!(log.calls(), vec![Call::FilterOptions(None, false)]);
    }

    #[test]
    fn existing_options_are_left_untouched() {
        let (model, log) = model_with(
            RecordingAttribute::new("size").with_options(vec![FilterOption::new("x", "X")]),
        );
        let existing = vec![FilterOption::new("a", "A")];

        let request = resolve_property_options(
            PropertyOptionsRequest::new(&model, "size").with_options(existing.clone()),
        );
        assert_eq!(request.options, Some(existing));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn empty_existing_options_count_as_resolved() {
        let (model, log) = model_with(RecordingAttribute::new("size"));
        let request = resolve_property_options(
            PropertyOptionsRequest::new(&model, "size").with_options(Vec::new()),
        );
        assert_eq!(request.options, Some(Vec::new()));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn foreign_models_are_ignored() {
        let request = resolve_property_options(PropertyOptionsRequest::new(&ForeignModel, "size"));
        assert!(request.options.is_none());
    }

    #[test]
    fn unknown_properties_are_ignored() {
        let (model, log) = model_with(RecordingAttribute::new("size"));
        let request = resolve_property_options(PropertyOptionsRequest::new(&model, "color"));
        assert!(request.options.is_none());
        assert!(log.calls().is_empty());
    }

    #[test]
    fn attribute_faults_become_placeholder_option() {
        let (model, _) = model_with(RecordingAttribute::new("size").failing("boom"));

        let request = resolve_property_options(PropertyOptionsRequest::new(&model, "size"));
        let options = request.options.unwrap();
        assert_eq!(options, vec![FilterOption::placeholder("Error: boom")]);
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Error: boom"]);
    }

    #[test]
    fn chain_runs_handlers_in_order() {
        let (model, _) = model_with(
            RecordingAttribute::new("size").with_options(vec![FilterOption::new("1", "One")]),
        );
        let chain = OptionsHandlerChain::new()
            .with_handler(|request| request)
            .with_handler(resolve_property_options)
            .with_handler(|mut request| {
                if let Some(options) = request.options.as_mut() {
                    options.push(FilterOption::new("", "-"));
                }
                request
            });

        assert_eq!(chain.len(), 3);
        let request = chain.dispatch(PropertyOptionsRequest::new(&model, "size"));
        assert_eq!(
            request.options,
            Some(vec![FilterOption::new("1", "One"), FilterOption::new("", "-")])
        );
    }

    #[test]
    fn earlier_handler_wins_over_bridge() {
        let (model, log) = model_with(RecordingAttribute::new("size"));
        let chain = OptionsHandlerChain::new()
            .with_handler(|request| request.with_options(vec![FilterOption::new("a", "A")]))
            .with_handler(resolve_property_options);

        let request = chain.dispatch(PropertyOptionsRequest::new(&model, "size"));
        assert_eq!(request.options, Some(vec![FilterOption::new("a", "A")]));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn empty_chain_returns_request_unchanged() {
        let chain = OptionsHandlerChain::new();
        assert!(chain.is_empty());
        let request = chain.dispatch(PropertyOptionsRequest::new(&ForeignModel, "size"));
        assert!(request.options.is_none());
    }
}
