//! Endpoint descriptors for BM Parts API resources.
//!
//! Every resource method is backed by a const [`Endpoint`] describing its
//! HTTP method, path templates, required parameters, and documentation
//! reference. Keeping the routing data in descriptors makes path
//! construction a plain function that can be tested without a client.

use std::fmt;

use crate::clients::HttpMethod;
use crate::rest::errors::ApiError;
use crate::rest::params::{require_params, Options};

/// A reference into the BM Parts API documentation.
///
/// Renders as `{base}#{anchor}`, matching the section links used on the
/// documentation site. Validation errors carry one of these so a caller
/// can jump straight to the relevant endpoint description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocsRef {
    /// Documentation page path (e.g., `/garage`).
    pub base: &'static str,
    /// Section anchor within the page.
    pub anchor: &'static str,
}

impl DocsRef {
    /// Creates a documentation reference.
    #[must_use]
    pub const fn new(base: &'static str, anchor: &'static str) -> Self {
        Self { base, anchor }
    }
}

impl fmt::Display for DocsRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.base, self.anchor)
    }
}

/// A const descriptor for a single API endpoint.
///
/// The descriptor holds everything needed to turn an [`Options`] bag into
/// a concrete request path:
///
/// - `method` selects GET, POST, or DELETE
/// - `base` is prepended to the resolved template
/// - `templates` lists path templates with `{name}` placeholders; when an
///   endpoint has an optional path segment it lists both forms and the
///   most specific template whose placeholders are all present wins
/// - `required` names the parameters validated before any request is sent
/// - `docs` points at the endpoint's documentation section
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    /// HTTP method for this endpoint.
    pub method: HttpMethod,
    /// Path prefix shared by the resource group.
    pub base: &'static str,
    /// Path templates, most specific first.
    pub templates: &'static [&'static str],
    /// Parameter names that must be present before dispatch.
    pub required: &'static [&'static str],
    /// Documentation reference for error messages.
    pub docs: DocsRef,
}

impl Endpoint {
    /// Creates a GET endpoint descriptor.
    #[must_use]
    pub const fn get(
        base: &'static str,
        templates: &'static [&'static str],
        required: &'static [&'static str],
        docs: DocsRef,
    ) -> Self {
        Self {
            method: HttpMethod::Get,
            base,
            templates,
            required,
            docs,
        }
    }

    /// Creates a POST endpoint descriptor.
    #[must_use]
    pub const fn post(
        base: &'static str,
        templates: &'static [&'static str],
        required: &'static [&'static str],
        docs: DocsRef,
    ) -> Self {
        Self {
            method: HttpMethod::Post,
            base,
            templates,
            required,
            docs,
        }
    }

    /// Creates a DELETE endpoint descriptor.
    #[must_use]
    pub const fn delete(
        base: &'static str,
        templates: &'static [&'static str],
        required: &'static [&'static str],
        docs: DocsRef,
    ) -> Self {
        Self {
            method: HttpMethod::Delete,
            base,
            templates,
            required,
            docs,
        }
    }

    /// Resolves the endpoint into a concrete request path.
    ///
    /// Validates required parameters, picks the most specific template
    /// whose placeholders are all present, and interpolates the values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameters`] when required parameters
    /// are absent, or when no template's placeholders can be satisfied.
    pub fn resolve(&self, options: &Options) -> Result<String, ApiError> {
        require_params(options, self.required, &self.docs)?;

        let template = self.select_template(options);
        let sub_path = interpolate(template, options, &self.docs)?;

        Ok(format!("{}{sub_path}", self.base))
    }

    /// Picks the template with the most placeholders that are all present
    /// in the bag. A template without placeholders always matches, which
    /// is how optional path segments fall back to the shorter form.
    fn select_template(&self, options: &Options) -> &'static str {
        self.templates
            .iter()
            .copied()
            .filter(|template| {
                placeholders(template).all(|name| options.path_param(name).is_some())
            })
            .max_by_key(|template| placeholders(template).count())
            .unwrap_or_else(|| self.templates[0])
    }
}

/// Iterates over `{name}` placeholders in a template.
fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    template.split('{').skip(1).filter_map(|part| {
        let end = part.find('}')?;
        Some(&part[..end])
    })
}

/// Substitutes `{name}` placeholders in a template with values from the bag.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameters`] naming the first placeholder
/// that has no path-renderable value.
fn interpolate(
    template: &'static str,
    options: &Options,
    docs: &DocsRef,
) -> Result<String, ApiError> {
    let mut result = String::with_capacity(template.len());
    let mut rest: &'static str = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            result.push_str(&rest[open..]);
            return Ok(result);
        };
        let name: &'static str = &after[..close];

        match options.path_param(name) {
            Some(value) => result.push_str(&value),
            None => {
                // A template was selected whose placeholder cannot render;
                // surface it the same way as a failed required check.
                return Err(ApiError::MissingParameters {
                    missing: vec![name],
                    docs: *docs,
                });
            }
        }

        rest = &after[close + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS: DocsRef = DocsRef::new("/advertising", "get-advertising-promo-promo-uuid");

    #[test]
    fn test_docs_ref_display() {
        assert_eq!(DOCS.to_string(), "/advertising#get-advertising-promo-promo-uuid");
    }

    #[test]
    fn test_resolve_static_template() {
        let endpoint = Endpoint::get("/advertising", &["/banners"], &[], DOCS);

        let path = endpoint.resolve(&Options::new()).unwrap();
        assert_eq!(path, "/advertising/banners");
    }

    #[test]
    fn test_resolve_interpolates_parameters() {
        let endpoint = Endpoint::get(
            "/advertising",
            &["/promo/{promo_uuid}/progress"],
            &["promo_uuid"],
            DOCS,
        );

        let options = Options::new().with("promo_uuid", "abc-123");
        let path = endpoint.resolve(&options).unwrap();
        assert_eq!(path, "/advertising/promo/abc-123/progress");
    }

    #[test]
    fn test_resolve_rejects_missing_required() {
        let endpoint = Endpoint::get(
            "/advertising",
            &["/promo/{promo_uuid}/progress"],
            &["promo_uuid"],
            DOCS,
        );

        let err = endpoint.resolve(&Options::new()).unwrap_err();
        match err {
            ApiError::MissingParameters { missing, docs } => {
                assert_eq!(missing, vec!["promo_uuid"]);
                assert_eq!(docs, DOCS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_concatenated_placeholders() {
        // The remote route concatenates both values without a separator
        let endpoint = Endpoint::get(
            "/documents",
            &["/{type}{uuid}/"],
            &["type", "uuid"],
            DocsRef::new("/documents", "get-documents-string-type-string-uuid"),
        );

        let options = Options::new().with("type", "act").with("uuid", "X1");
        let path = endpoint.resolve(&options).unwrap();
        assert_eq!(path, "/documents/actX1/");
    }

    #[test]
    fn test_optional_segment_selects_most_specific_template() {
        let endpoint = Endpoint::get(
            "/processing",
            &["/download/unshipped/{task_id}", "/download/unshipped"],
            &[],
            DocsRef::new("/processing", "excel"),
        );

        let without = endpoint.resolve(&Options::new()).unwrap();
        assert_eq!(without, "/processing/download/unshipped");

        let with = endpoint
            .resolve(&Options::new().with("task_id", "t1"))
            .unwrap();
        assert_eq!(with, "/processing/download/unshipped/t1");
    }

    #[test]
    fn test_numeric_parameters_render_in_paths() {
        let endpoint = Endpoint::get(
            "/processing",
            &["/shipment/{task_id}"],
            &["task_id"],
            DocsRef::new("/processing", "get-processing-shipment-task-id"),
        );

        let options = Options::new().with("task_id", 42);
        assert_eq!(endpoint.resolve(&options).unwrap(), "/processing/shipment/42");
    }

    #[test]
    fn test_placeholders_parser() {
        let names: Vec<&str> = placeholders("/car/{car_name}/model/{model_name}").collect();
        assert_eq!(names, vec!["car_name", "model_name"]);

        let none: Vec<&str> = placeholders("/banners").collect();
        assert!(none.is_empty());
    }
}
