use crate::group::{ProxyButton, ProxyGroup, ProxyGroupId};

/// The accessibility tree that proxy groups are mounted into
pub trait ProxyHost: Send + Sync {
    fn mount(&self, group: &ProxyGroup);

    fn unmount(&self, group: ProxyGroupId);

    /// Focus the proxy and draw the focus border around its bounds
    fn focus(&self, button: &ProxyButton);
}

/// Host that renders nothing, for charts without an accessibility tree
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProxyHost;

impl ProxyHost for NullProxyHost {
    fn mount(&self, _group: &ProxyGroup) {}

    fn unmount(&self, _group: ProxyGroupId) {}

    fn focus(&self, _button: &ProxyButton) {}
}
