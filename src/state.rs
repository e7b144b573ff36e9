use crate::cache::{init_cache, AppCache};
use crate::config::Config;
use crate::explorer::ExplorerClient;
use crate::networks::NETWORKS;

pub struct AppState {
    pub config: Config,
    /// One client per registered network, registry order.
    pub clients: Vec<ExplorerClient>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let clients = NETWORKS
            .iter()
            .map(|network| ExplorerClient::new(&config, network))
            .collect();
        let cache = init_cache(&config);

        Self {
            config,
            clients,
            cache,
        }
    }
}
