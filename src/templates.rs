use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "activities.html")]
pub(crate) struct ActivitiesTemplate {
    pub(crate) app_name: String,
    pub(crate) activities: Vec<ActivityView>,
}

pub(crate) struct ActivityView {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) schedule: String,
    pub(crate) max_participants: u32,
    pub(crate) spots_left: u32,
    pub(crate) participants: Vec<String>,
}
