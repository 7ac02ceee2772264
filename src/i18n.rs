//! Display strings for the supported languages

use clap::ValueEnum;
use strum::{AsRefStr, Display, EnumIter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Keys for every localized string the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TextKey {
    TraderManagement,
    AddNewTrader,
    Success,
    Error,
    RedeployRequired,
    BasicInfo,
    TraderId,
    TraderName,
    AiConfiguration,
    AiModel,
    ExchangeConfiguration,
    Exchange,
    PrivateKey,
    WalletAddress,
    UseTestnet,
    TradingParameters,
    InitialBalance,
    ScanInterval,
    Minutes,
    Submitting,
    AddTrader,
    AddTraderError,
    FieldRequired,
    FieldInvalidUrl,
    FieldBelowMin,
    FieldStepMismatch,
    FieldNotANumber,
    FieldOutOfRange,
    KeyHelp,
}

/// Look up the display string for `key`. Every key has an entry in every language.
pub fn t(key: TextKey, language: Language) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Zh => chinese(key),
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::TraderManagement => "Trader Management",
        TextKey::AddNewTrader => "Add a new AI trader to the competition",
        TextKey::Success => "Success",
        TextKey::Error => "Error",
        TextKey::RedeployRequired => "Redeploy the service for the new trader to take effect.",
        TextKey::BasicInfo => "Basic Info",
        TextKey::TraderId => "Trader ID",
        TextKey::TraderName => "Trader Name",
        TextKey::AiConfiguration => "AI Configuration",
        TextKey::AiModel => "AI Model",
        TextKey::ExchangeConfiguration => "Exchange Configuration",
        TextKey::Exchange => "Exchange",
        TextKey::PrivateKey => "Private Key",
        TextKey::WalletAddress => "Wallet Address",
        TextKey::UseTestnet => "Use Testnet",
        TextKey::TradingParameters => "Trading Parameters",
        TextKey::InitialBalance => "Initial Balance",
        TextKey::ScanInterval => "Scan Interval",
        TextKey::Minutes => "minutes",
        TextKey::Submitting => "Submitting...",
        TextKey::AddTrader => "Add Trader",
        TextKey::AddTraderError => "Failed to add trader",
        TextKey::FieldRequired => "Please fill out this field.",
        TextKey::FieldInvalidUrl => "Please enter a URL.",
        TextKey::FieldBelowMin => "Value must be greater than or equal to the minimum.",
        TextKey::FieldStepMismatch => "Please enter a valid value.",
        TextKey::FieldNotANumber => "Please enter a number.",
        TextKey::FieldOutOfRange => "Value is too large.",
        TextKey::KeyHelp => "Tab/↑↓: Move | ◄►/Space: Change | Enter: Submit | Esc: Quit",
    }
}

fn chinese(key: TextKey) -> &'static str {
    match key {
        TextKey::TraderManagement => "交易员管理",
        TextKey::AddNewTrader => "添加新的AI交易员到竞赛中",
        TextKey::Success => "成功",
        TextKey::Error => "错误",
        TextKey::RedeployRequired => "请重新部署服务以使新配置生效。",
        TextKey::BasicInfo => "基本信息",
        TextKey::TraderId => "交易员ID",
        TextKey::TraderName => "交易员名称",
        TextKey::AiConfiguration => "AI配置",
        TextKey::AiModel => "AI模型",
        TextKey::ExchangeConfiguration => "交易所配置",
        TextKey::Exchange => "交易所",
        TextKey::PrivateKey => "私钥",
        TextKey::WalletAddress => "钱包地址",
        TextKey::UseTestnet => "使用测试网",
        TextKey::TradingParameters => "交易参数",
        TextKey::InitialBalance => "初始余额",
        TextKey::ScanInterval => "扫描间隔",
        TextKey::Minutes => "分钟",
        TextKey::Submitting => "提交中...",
        TextKey::AddTrader => "添加交易员",
        TextKey::AddTraderError => "添加交易员失败",
        TextKey::FieldRequired => "请填写此字段。",
        TextKey::FieldInvalidUrl => "请输入网址。",
        TextKey::FieldBelowMin => "值必须大于或等于最小值。",
        TextKey::FieldStepMismatch => "请输入有效值。",
        TextKey::FieldNotANumber => "请输入数字。",
        TextKey::FieldOutOfRange => "数值过大。",
        TextKey::KeyHelp => "Tab/↑↓: 移动 | ◄►/空格: 切换 | Enter: 提交 | Esc: 退出",
    }
}
