pub mod request;
pub mod response;

pub use request::{
    BasicPatternRequest, ChatRequest, ChatResponse, ElitePatternRequest, ProPatternRequest,
    SonarRequest, SonarResponse, VisionTierRequest,
};
pub use response::{
    BasicPatternResponse, ElitePatternResponse, FusionReport, FusionWeather, PatternConditions,
    ProPatternResponse, SessionConditions, SessionContext, Tier, VisionConditions, VisionSummary,
    WeatherSource,
};
