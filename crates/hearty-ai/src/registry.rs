use hearty_common::ProviderKind;
use hearty_net::NetworkClient;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::providers::{DoubaoProvider, GeminiProvider, GrokProvider, OpenAiProvider, QwenProvider};
use crate::ReportProvider;

/// Provider adapters available to the report service, keyed by kind.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn ReportProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every built-in provider against one backend route.
    pub fn with_backend(network: Arc<dyn NetworkClient>, report_path: &str) -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::ALL {
            registry.register(create_provider(kind, network.clone(), report_path));
        }
        debug!(
            "Registered {} providers on {} route {}",
            registry.len(),
            network.get_name(),
            report_path
        );
        registry
    }

    /// Adds a provider, returning the one it replaced for the same kind.
    pub fn register(
        &mut self,
        provider: Arc<dyn ReportProvider>,
    ) -> Option<Arc<dyn ReportProvider>> {
        self.providers.insert(provider.kind(), provider)
    }

    pub fn unregister(&mut self, kind: ProviderKind) -> Option<Arc<dyn ReportProvider>> {
        self.providers.remove(&kind)
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn ReportProvider>> {
        self.providers.get(&kind).cloned()
    }

    /// Registered kinds in declaration order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL.into_iter().filter(|kind| self.providers.contains_key(kind)).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

pub fn create_provider(
    kind: ProviderKind,
    network: Arc<dyn NetworkClient>,
    report_path: &str,
) -> Arc<dyn ReportProvider> {
    match kind {
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(network, report_path)),
        ProviderKind::Grok => Arc::new(GrokProvider::new(network, report_path)),
        ProviderKind::Qwen => Arc::new(QwenProvider::new(network, report_path)),
        ProviderKind::Doubao => Arc::new(DoubaoProvider::new(network, report_path)),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(network, report_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearty_net::OfflineNetworkClient;

    #[test]
    fn test_with_backend_registers_every_kind() {
        let registry =
            ProviderRegistry::with_backend(Arc::new(OfflineNetworkClient::new()), "/ai/health-report");

        assert_eq!(registry.kinds(), ProviderKind::ALL.to_vec());
        for kind in ProviderKind::ALL {
            let provider = registry.get(kind).unwrap();
            assert_eq!(provider.kind(), kind);
            assert_eq!(provider.get_name(), kind.to_string());
        }
    }

    #[test]
    fn test_unregister_removes_provider() {
        let mut registry =
            ProviderRegistry::with_backend(Arc::new(OfflineNetworkClient::new()), "/ai/health-report");

        assert!(registry.unregister(ProviderKind::Gemini).is_some());
        assert!(registry.get(ProviderKind::Gemini).is_none());
        assert_eq!(registry.len(), 4);
        assert!(!registry.kinds().contains(&ProviderKind::Gemini));
    }
}
