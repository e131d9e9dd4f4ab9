// Application state for HTTP handlers
use crate::application::assistant_service::AssistantService;
use crate::application::forecast_service::ForecastService;
use crate::application::overview_service::OverviewService;
use crate::application::plan_service::PlanService;
use crate::application::schedule_service::ScheduleService;
use crate::application::vendor_service::VendorService;
use crate::application::workflow_service::WorkflowService;

#[derive(Clone)]
pub struct AppState {
    pub overview_service: OverviewService,
    pub forecast_service: ForecastService,
    pub vendor_service: VendorService,
    pub schedule_service: ScheduleService,
    pub plan_service: PlanService,
    pub workflow_service: WorkflowService,
    pub assistant_service: AssistantService,
}
