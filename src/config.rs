use crate::domain::errors::{AppError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Height in pixels shared by every chart instance.
pub const DEFAULT_CHART_HEIGHT: u32 = 300;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Dashboard configuration handed over by the host page as JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub list: ListConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListConfig {
    pub page_size: usize,
    /// Symbol shown in place of the wrapper token (`ETH` for `WETH`)
    pub native_symbol: String,
    pub native_wrapper_symbol: String,
    /// `{address}` is replaced by the token address
    pub token_logo_url: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            native_symbol: "ETH".to_string(),
            native_wrapper_symbol: "WETH".to_string(),
            token_logo_url: "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets/{address}/logo.png".to_string(),
        }
    }
}

impl ListConfig {
    pub fn logo_url(&self, address: &str) -> String {
        self.token_logo_url.replace("{address}", address)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub height: u32,
    pub series_color: String,
    pub area_bottom_color: String,
    pub grid_color: String,
    pub crosshair_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_CHART_HEIGHT,
            series_color: "#4526A2".to_string(),
            area_bottom_color: "rgba(69, 38, 162, 0)".to_string(),
            grid_color: "rgba(197, 203, 206, 0.5)".to_string(),
            crosshair_color: "rgba(32, 38, 46, 0.1)".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate; an empty string yields the defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.list.page_size == 0 {
            return Err(AppError::ConfigError("list.pageSize must be at least 1".to_string()));
        }
        if self.chart.height == 0 {
            return Err(AppError::ConfigError("chart.height must be at least 1".to_string()));
        }
        Ok(())
    }
}
