#[derive(Clone)]
pub struct Config {
    pub rpc_url: String,
    pub contract_address: String,
    pub predict_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let project_id = std::env::var("INFURA_PROJECT_ID").unwrap_or_default();
        Self {
            rpc_url: std::env::var("RPC_URL")
                .unwrap_or_else(|_| format!("https://polygon-amoy.infura.io/v3/{}", project_id)),
            contract_address: std::env::var("CONTRACT_ADDRESS")
                .unwrap_or_else(|_| "0xDf0544702106ceD00505Ff1fEb7D6Cb0912eEbfC".to_string()),
            predict_url: std::env::var("PREDICT_URL")
                .unwrap_or_else(|_| "https://swach-ml-api.onrender.com/predict".to_string()),
        }
    }
}
