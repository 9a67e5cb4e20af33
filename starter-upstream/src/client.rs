//! Capability interface for upstream lookups

use starter_core::StarterResult;

/// Read-only access to the two tracked upstreams
#[cfg_attr(test, mockall::automock)]
pub trait UpstreamClient {
    /// SHA of the tracked branch head, `None` when the response carries no SHA
    fn fetch_latest_commit(&self) -> StarterResult<Option<String>>;

    /// Every version string the package registry lists, stable or not
    fn fetch_package_versions(&self) -> StarterResult<Vec<String>>;
}

impl<T: UpstreamClient + ?Sized> UpstreamClient for &T {
    fn fetch_latest_commit(&self) -> StarterResult<Option<String>> {
        (**self).fetch_latest_commit()
    }

    fn fetch_package_versions(&self) -> StarterResult<Vec<String>> {
        (**self).fetch_package_versions()
    }
}

impl<T: UpstreamClient + ?Sized> UpstreamClient for Box<T> {
    fn fetch_latest_commit(&self) -> StarterResult<Option<String>> {
        (**self).fetch_latest_commit()
    }

    fn fetch_package_versions(&self) -> StarterResult<Vec<String>> {
        (**self).fetch_package_versions()
    }
}
