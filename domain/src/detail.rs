//! Loading a record together with the collections shown on its detail page.

use crate::campaign_progress::CampaignProgress;
use crate::repository::{RecordId, Repository, RepositoryError, Resource, Subresource, SubresourceRepository};
use crate::resources::{CampaignDonations, Campaigns, ProjectAssignments, ProjectHoursLogs, ProjectTasks, Projects};
use shared::{Campaign, Donation, Project, ProjectTask, VolunteerAssignment, VolunteerHoursLog};
use tracing::warn;

/// What a detail page shows while and after loading
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<T, RepositoryError>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(RepositoryError::NotFound) => ViewState::NotFound,
            Err(error) => ViewState::Failed(error.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithChildren<P, C> {
    pub record: P,
    pub children: Vec<C>,
}

type ParentRecord<S> = <<S as Subresource>::Parent as Resource>::Record;

/// Fetch the parent first and its children only once the parent exists
pub async fn load_then_children<S, Repo>(
    repo: &Repo,
    id: RecordId,
) -> Result<WithChildren<ParentRecord<S>, S::Record>, RepositoryError>
where
    S: Subresource,
    Repo: Repository<S::Parent> + SubresourceRepository<S> + ?Sized,
{
    let record = Repository::<S::Parent>::get(repo, id).await?;
    let children = SubresourceRepository::<S>::list_children(repo, id).await?;
    Ok(WithChildren { record, children })
}

/// Fetch the parent and its children concurrently
pub async fn load_with_children<S, Repo>(
    repo: &Repo,
    id: RecordId,
) -> Result<WithChildren<ParentRecord<S>, S::Record>, RepositoryError>
where
    S: Subresource,
    Repo: Repository<S::Parent> + SubresourceRepository<S> + ?Sized,
{
    let (record, children) = futures::join!(
        Repository::<S::Parent>::get(repo, id),
        SubresourceRepository::<S>::list_children(repo, id)
    );
    Ok(WithChildren {
        record: record?,
        children: children?,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub tasks: Vec<ProjectTask>,
    pub assignments: Vec<VolunteerAssignment>,
    pub hours_logs: Vec<VolunteerHoursLog>,
}

/// The project itself, then its tasks, assignments and hours concurrently
pub async fn load_project_detail<Repo>(repo: &Repo, id: RecordId) -> Result<ProjectDetail, RepositoryError>
where
    Repo: Repository<Projects>
        + SubresourceRepository<ProjectTasks>
        + SubresourceRepository<ProjectAssignments>
        + SubresourceRepository<ProjectHoursLogs>
        + ?Sized,
{
    let project = Repository::<Projects>::get(repo, id).await?;
    let (tasks, assignments, hours_logs) = futures::join!(
        SubresourceRepository::<ProjectTasks>::list_children(repo, id),
        SubresourceRepository::<ProjectAssignments>::list_children(repo, id),
        SubresourceRepository::<ProjectHoursLogs>::list_children(repo, id)
    );
    Ok(ProjectDetail {
        project,
        tasks: tasks?,
        assignments: assignments?,
        hours_logs: hours_logs?,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDetail {
    pub campaign: Campaign,
    pub donations: Vec<Donation>,
    pub progress: CampaignProgress,
}

/// Campaign and donations concurrently.
///
/// When only the donations fail the campaign is still shown, with progress
/// computed from no donations.
pub async fn load_campaign_detail<Repo>(repo: &Repo, id: RecordId) -> Result<CampaignDetail, RepositoryError>
where
    Repo: Repository<Campaigns> + SubresourceRepository<CampaignDonations> + ?Sized,
{
    let (campaign, donations) = futures::join!(
        Repository::<Campaigns>::get(repo, id),
        SubresourceRepository::<CampaignDonations>::list_children(repo, id)
    );
    let campaign = campaign?;
    let donations = donations.unwrap_or_else(|error| {
        warn!(campaign = id, %error, "could not load campaign donations");
        Vec::new()
    });
    let progress = CampaignProgress::calculate(campaign.goal_amount, &donations);
    Ok(CampaignDetail {
        campaign,
        donations,
        progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ContactNotes, Contacts, InventoryItems, ItemTransactions};
    use crate::test_utils::FakeRepository;
    use rust_decimal::Decimal;
    use shared::{Contact, ContactNote, DonationType, InventoryItem, InventoryTransaction, TransactionType};

    #[tokio::test]
    async fn test_contact_then_notes() {
        let repo = FakeRepository::<Contacts>::new()
            .returning(Contact { id: 7, first_name: "Ada".to_string(), ..Contact::default() })
            .with_children(
                ContactNotes::LIST_SEGMENT,
                &[ContactNote { id: 1, note_text: "Met at fair.".to_string(), ..ContactNote::default() }],
            );

        let loaded = load_then_children::<ContactNotes, _>(&repo, 7).await.unwrap();

        assert_eq!(loaded.record.first_name, "Ada");
        assert_eq!(loaded.children.len(), 1);
        assert_eq!(repo.calls(), vec!["get 7".to_string(), "list notes 7".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_parent_skips_children() {
        let repo = FakeRepository::<Contacts>::new();

        let result = load_then_children::<ContactNotes, _>(&repo, 99).await;

        assert_eq!(result, Err(RepositoryError::NotFound));
        assert_eq!(repo.calls(), vec!["get 99".to_string()]);
        assert_eq!(ViewState::from_result(result), ViewState::NotFound);
    }

    #[tokio::test]
    async fn test_item_and_transactions_load_together() {
        let repo = FakeRepository::<InventoryItems>::new()
            .returning(InventoryItem {
                id: 5,
                name: "Rice".to_string(),
                quantity_on_hand: Decimal::new(40, 0),
                ..InventoryItem::default()
            })
            .with_children(
                ItemTransactions::LIST_SEGMENT,
                &[InventoryTransaction {
                    id: 1,
                    item: 5,
                    transaction_type: TransactionType::In,
                    quantity: Decimal::new(40, 0),
                    ..InventoryTransaction::default()
                }],
            );

        let loaded = load_with_children::<ItemTransactions, _>(&repo, 5).await.unwrap();

        assert_eq!(loaded.record.quantity_on_hand, Decimal::new(40, 0));
        assert_eq!(loaded.children[0].transaction_type, TransactionType::In);
        assert_eq!(repo.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_child_failure_fails_the_load() {
        let repo = FakeRepository::<InventoryItems>::new()
            .returning(InventoryItem { id: 5, ..InventoryItem::default() })
            .failing_children(ItemTransactions::LIST_SEGMENT, RepositoryError::Transport("offline".to_string()));

        let state = ViewState::from_result(load_with_children::<ItemTransactions, _>(&repo, 5).await);

        assert_eq!(state, ViewState::Failed("network error: offline".to_string()));
        assert!(state.ready().is_none());
    }

    #[tokio::test]
    async fn test_project_detail_gathers_three_lists() {
        let repo = FakeRepository::<Projects>::new()
            .returning(Project { id: 3, name: "Clean Water".to_string(), ..Project::default() })
            .with_children(
                ProjectTasks::LIST_SEGMENT,
                &[ProjectTask { id: 1, title: "Survey".to_string(), ..ProjectTask::default() }],
            )
            .with_children(
                ProjectHoursLogs::LIST_SEGMENT,
                &[VolunteerHoursLog { id: 4, hours_worked: Decimal::new(35, 1), ..VolunteerHoursLog::default() }],
            );

        let detail = load_project_detail(&repo, 3).await.unwrap();

        assert_eq!(detail.project.name, "Clean Water");
        assert_eq!(detail.tasks.len(), 1);
        assert!(detail.assignments.is_empty());
        assert_eq!(detail.hours_logs[0].hours_worked, Decimal::new(35, 1));
        assert_eq!(repo.calls()[0], "get 3");
        assert_eq!(repo.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_campaign_detail_computes_progress() {
        let donation = |amount: i64, donation_type: DonationType| Donation {
            donation_type,
            amount: (donation_type == DonationType::Monetary).then(|| Decimal::new(amount, 0)),
            ..Donation::default()
        };
        let repo = FakeRepository::<Campaigns>::new()
            .returning(Campaign { id: 2, goal_amount: Decimal::new(1000, 0), ..Campaign::default() })
            .with_children(
                CampaignDonations::LIST_SEGMENT,
                &[
                    donation(100, DonationType::Monetary),
                    donation(200, DonationType::Monetary),
                    donation(500, DonationType::InKind),
                ],
            );

        let detail = load_campaign_detail(&repo, 2).await.unwrap();

        assert_eq!(detail.donations.len(), 3);
        assert_eq!(detail.progress.total_raised, Decimal::new(300, 0));
        assert_eq!(detail.progress.percent, 30.0);
    }

    #[tokio::test]
    async fn test_campaign_shown_when_donations_fail() {
        let repo = FakeRepository::<Campaigns>::new()
            .returning(Campaign { id: 2, goal_amount: Decimal::new(1000, 0), ..Campaign::default() })
            .failing_children(CampaignDonations::LIST_SEGMENT, RepositoryError::Transport("offline".to_string()));

        let detail = load_campaign_detail(&repo, 2).await.unwrap();

        assert!(detail.donations.is_empty());
        assert_eq!(detail.progress.percent, 0.0);
    }
}
