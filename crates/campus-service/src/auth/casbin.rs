use casbin::{CoreApi, MgmtApi};

use campus_core::{constants::PROFILE_PAGE, types::Role};

use crate::error::ServiceResult;
use crate::portal::roles::RoleTable;

const VIEW: &str = "view";

/// Subject every role is grouped under, used for pages open to all signed-in users.
const SIGNED_IN: &str = "signed_in";

/// Decides which portal pages a role may open.
///
/// Policies are generated from the role table: each navigation entry of a role
/// becomes `(role:<role>, <href>, view)`. The profile page is granted to the
/// `signed_in` group, which every role belongs to.
pub struct PageGuard {
    enforcer: casbin::Enforcer,
}

impl PageGuard {
    /// ## Summary
    /// Builds an in-memory enforcer whose policies mirror `table`.
    ///
    /// ## Errors
    /// Returns an error if the model cannot be parsed or policies cannot be added.
    #[tracing::instrument(skip(table))]
    pub async fn from_role_table(table: &RoleTable) -> ServiceResult<Self> {
        tracing::debug!("Initializing page guard");

        let model = casbin::DefaultModel::from_str(include_str!("page_model.conf")).await?;
        let adapter = casbin::MemoryAdapter::default();
        let mut enforcer = casbin::Enforcer::new(model, adapter).await?;

        let policies: Vec<Vec<String>> = table
            .profiles()
            .flat_map(|profile| {
                let subject = profile.role.casbin_subject();
                profile
                    .navigation
                    .iter()
                    .map(move |item| vec![subject.clone(), item.href.to_string(), VIEW.to_string()])
            })
            .chain(std::iter::once(vec![
                SIGNED_IN.to_string(),
                PROFILE_PAGE.to_string(),
                VIEW.to_string(),
            ]))
            .collect();
        enforcer.add_policies(policies).await?;

        let groupings: Vec<Vec<String>> = Role::ALL
            .iter()
            .map(|role| vec![role.casbin_subject(), SIGNED_IN.to_string()])
            .collect();
        enforcer.add_grouping_policies(groupings).await?;

        tracing::info!(
            policy_count = enforcer.get_policy().len(),
            grouping_count = enforcer.get_grouping_policy().len(),
            "Page guard initialized"
        );
        Ok(Self { enforcer })
    }

    /// ## Summary
    /// Whether `role` may view the page at `path`. Trailing slashes are ignored.
    ///
    /// ## Errors
    /// Returns an error if the enforcer fails to evaluate the request.
    pub fn can_view(&self, role: Role, path: &str) -> ServiceResult<bool> {
        let path = normalize(path);
        let allowed = self
            .enforcer
            .enforce((role.casbin_subject().as_str(), path, VIEW))?;
        tracing::trace!(%role, path, allowed, "Page access decision");
        Ok(allowed)
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
