//! Classification rules.
//!
//! Rules run in [`RULES`] order against one accumulator. Each rule may
//! append lines and may overwrite the color, so a later rule's color wins.

use super::Classification;
use super::StatusColor;
use crate::records::{PullRequestDetail, UserProfile};
use crate::tickets::TicketLink;
use chrono::{DateTime, Utc};

pub(crate) const STALE_WARNING: &str = "_No updates in over 2 days!_";
pub(crate) const MISSING_DESCRIPTION_WARNING: &str = "_Please add a description!_";
pub(crate) const MISSING_TICKET_WARNING: &str = "_Please link to a clubhouse card!_";

/// Inputs shared by every rule.
pub(crate) struct RuleInput<'a> {
    pub detail: &'a PullRequestDetail,
    pub approver: Option<&'a UserProfile>,
    pub ticket: Option<&'a TicketLink>,
    pub deadline: DateTime<Utc>,
}

type Rule = fn(&RuleInput<'_>, &mut Classification);

pub(crate) const RULES: [Rule; 4] = [approval, staleness, description, ticket_link];

fn approval(input: &RuleInput<'_>, acc: &mut Classification) {
    if let Some(approver) = input.approver {
        acc.color = StatusColor::Approved;
        acc.infos.push(format!("Approved by {} :+1:", approver.name));
    }
}

fn staleness(input: &RuleInput<'_>, acc: &mut Classification) {
    if input.detail.summary.updated_at <= input.deadline {
        acc.warnings.push(STALE_WARNING.to_string());
        acc.color = StatusColor::PastDeadline;
    }
}

fn description(input: &RuleInput<'_>, acc: &mut Classification) {
    if input.detail.summary.summary_line.trim().is_empty() {
        acc.warnings.push(MISSING_DESCRIPTION_WARNING.to_string());
        acc.color = StatusColor::Invalid;
    }
}

fn ticket_link(input: &RuleInput<'_>, acc: &mut Classification) {
    match input.ticket {
        Some(ticket) => acc
            .infos
            .push(format!("<{}|Clubhouse card #{}>", ticket.url, ticket.id)),
        None => {
            acc.warnings.push(MISSING_TICKET_WARNING.to_string());
            acc.color = StatusColor::Invalid;
        }
    }
}
