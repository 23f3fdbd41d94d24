// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Closed vocabularies of the learning-analytics schema.
//!
//! Each category of permitted subtype tags (event types, entity types,
//! profile actions, roles, statuses) is a fixed enumeration carrying its
//! IRI term. Entities store the terms as string properties via
//! [`as_str`](EventType::as_str).

use std::fmt;
use std::str::FromStr;

/// The JSON-LD context shared by all event payloads.
pub const EVENT_CONTEXT: &str = "http://purl.imsglobal.org/ctx/caliper/v1/Context";

/// The permitted event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	Event,
	AnnotationEvent,
	AssessmentEvent,
	AssessmentItemEvent,
	AssignableEvent,
	MediaEvent,
	NavigationEvent,
	OutcomeEvent,
	ReadingEvent,
	SessionEvent,
	ViewEvent,
}

impl EventType {
	pub const ALL: [EventType; 11] = [
		EventType::Event,
		EventType::AnnotationEvent,
		EventType::AssessmentEvent,
		EventType::AssessmentItemEvent,
		EventType::AssignableEvent,
		EventType::MediaEvent,
		EventType::NavigationEvent,
		EventType::OutcomeEvent,
		EventType::ReadingEvent,
		EventType::SessionEvent,
		EventType::ViewEvent,
	];

	/// Returns the IRI term for this event type.
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Event => "http://purl.imsglobal.org/caliper/v1/Event",
			EventType::AnnotationEvent => "http://purl.imsglobal.org/caliper/v1/AnnotationEvent",
			EventType::AssessmentEvent => "http://purl.imsglobal.org/caliper/v1/AssessmentEvent",
			EventType::AssessmentItemEvent => {
				"http://purl.imsglobal.org/caliper/v1/AssessmentItemEvent"
			}
			EventType::AssignableEvent => "http://purl.imsglobal.org/caliper/v1/AssignableEvent",
			EventType::MediaEvent => "http://purl.imsglobal.org/caliper/v1/MediaEvent",
			EventType::NavigationEvent => "http://purl.imsglobal.org/caliper/v1/NavigationEvent",
			EventType::OutcomeEvent => "http://purl.imsglobal.org/caliper/v1/OutcomeEvent",
			EventType::ReadingEvent => "http://purl.imsglobal.org/caliper/v1/ReadingEvent",
			EventType::SessionEvent => "http://purl.imsglobal.org/caliper/v1/SessionEvent",
			EventType::ViewEvent => "http://purl.imsglobal.org/caliper/v1/ViewEvent",
		}
	}

	/// Returns the JSON-LD context IRI for this event type.
	pub fn context(&self) -> &'static str {
		EVENT_CONTEXT
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for EventType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| format!("unknown event type: {s}"))
	}
}

/// The permitted entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
	Agent,
	Annotation,
	Assessment,
	AssessmentItem,
	Attempt,
	CourseSection,
	DigitalResource,
	LearningObjective,
	MediaObject,
	Person,
	Result,
	Session,
	SoftwareApplication,
	WebPage,
}

impl EntityType {
	pub const ALL: [EntityType; 14] = [
		EntityType::Agent,
		EntityType::Annotation,
		EntityType::Assessment,
		EntityType::AssessmentItem,
		EntityType::Attempt,
		EntityType::CourseSection,
		EntityType::DigitalResource,
		EntityType::LearningObjective,
		EntityType::MediaObject,
		EntityType::Person,
		EntityType::Result,
		EntityType::Session,
		EntityType::SoftwareApplication,
		EntityType::WebPage,
	];

	/// Returns the IRI term for this entity type.
	pub fn as_str(&self) -> &'static str {
		match self {
			EntityType::Agent => "http://purl.imsglobal.org/caliper/v1/Agent",
			EntityType::Annotation => "http://purl.imsglobal.org/caliper/v1/Annotation",
			EntityType::Assessment => "http://purl.imsglobal.org/caliper/v1/Assessment",
			EntityType::AssessmentItem => "http://purl.imsglobal.org/caliper/v1/AssessmentItem",
			EntityType::Attempt => "http://purl.imsglobal.org/caliper/v1/Attempt",
			EntityType::CourseSection => "http://purl.imsglobal.org/caliper/v1/lis/CourseSection",
			EntityType::DigitalResource => "http://purl.imsglobal.org/caliper/v1/DigitalResource",
			EntityType::LearningObjective => {
				"http://purl.imsglobal.org/caliper/v1/LearningObjective"
			}
			EntityType::MediaObject => "http://purl.imsglobal.org/caliper/v1/MediaObject",
			EntityType::Person => "http://purl.imsglobal.org/caliper/v1/lis/Person",
			EntityType::Result => "http://purl.imsglobal.org/caliper/v1/Result",
			EntityType::Session => "http://purl.imsglobal.org/caliper/v1/Session",
			EntityType::SoftwareApplication => {
				"http://purl.imsglobal.org/caliper/v1/SoftwareApplication"
			}
			EntityType::WebPage => "http://purl.imsglobal.org/caliper/v1/WebPage",
		}
	}
}

impl fmt::Display for EntityType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for EntityType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| format!("unknown entity type: {s}"))
	}
}

/// The permitted profile actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	Abandoned,
	Activated,
	Bookmarked,
	Commented,
	Completed,
	Deactivated,
	Graded,
	Hid,
	Highlighted,
	LoggedIn,
	LoggedOut,
	NavigatedTo,
	Paused,
	Resumed,
	Started,
	Submitted,
	Viewed,
}

impl Action {
	pub const ALL: [Action; 17] = [
		Action::Abandoned,
		Action::Activated,
		Action::Bookmarked,
		Action::Commented,
		Action::Completed,
		Action::Deactivated,
		Action::Graded,
		Action::Hid,
		Action::Highlighted,
		Action::LoggedIn,
		Action::LoggedOut,
		Action::NavigatedTo,
		Action::Paused,
		Action::Resumed,
		Action::Started,
		Action::Submitted,
		Action::Viewed,
	];

	/// Returns the IRI term for this action.
	pub fn as_str(&self) -> &'static str {
		match self {
			Action::Abandoned => "http://purl.imsglobal.org/vocab/caliper/v1/action#Abandoned",
			Action::Activated => "http://purl.imsglobal.org/vocab/caliper/v1/action#Activated",
			Action::Bookmarked => "http://purl.imsglobal.org/vocab/caliper/v1/action#Bookmarked",
			Action::Commented => "http://purl.imsglobal.org/vocab/caliper/v1/action#Commented",
			Action::Completed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Completed",
			Action::Deactivated => "http://purl.imsglobal.org/vocab/caliper/v1/action#Deactivated",
			Action::Graded => "http://purl.imsglobal.org/vocab/caliper/v1/action#Graded",
			Action::Hid => "http://purl.imsglobal.org/vocab/caliper/v1/action#Hid",
			Action::Highlighted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Highlighted",
			Action::LoggedIn => "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedIn",
			Action::LoggedOut => "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedOut",
			Action::NavigatedTo => "http://purl.imsglobal.org/vocab/caliper/v1/action#NavigatedTo",
			Action::Paused => "http://purl.imsglobal.org/vocab/caliper/v1/action#Paused",
			Action::Resumed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Resumed",
			Action::Started => "http://purl.imsglobal.org/vocab/caliper/v1/action#Started",
			Action::Submitted => "http://purl.imsglobal.org/vocab/caliper/v1/action#Submitted",
			Action::Viewed => "http://purl.imsglobal.org/vocab/caliper/v1/action#Viewed",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Action {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|a| a.as_str() == s)
			.ok_or_else(|| format!("unknown action: {s}"))
	}
}

/// The permitted membership roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
	Administrator,
	ContentDeveloper,
	Instructor,
	Learner,
	Manager,
	Member,
	Mentor,
	Officer,
	TeachingAssistant,
}

impl Role {
	pub const ALL: [Role; 9] = [
		Role::Administrator,
		Role::ContentDeveloper,
		Role::Instructor,
		Role::Learner,
		Role::Manager,
		Role::Member,
		Role::Mentor,
		Role::Officer,
		Role::TeachingAssistant,
	];

	/// Returns the IRI term for this role.
	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Administrator => "http://purl.imsglobal.org/vocab/lis/v1/role#Administrator",
			Role::ContentDeveloper => {
				"http://purl.imsglobal.org/vocab/lis/v1/role#ContentDeveloper"
			}
			Role::Instructor => "http://purl.imsglobal.org/vocab/lis/v1/role#Instructor",
			Role::Learner => "http://purl.imsglobal.org/vocab/lis/v1/role#Learner",
			Role::Manager => "http://purl.imsglobal.org/vocab/lis/v1/role#Manager",
			Role::Member => "http://purl.imsglobal.org/vocab/lis/v1/role#Member",
			Role::Mentor => "http://purl.imsglobal.org/vocab/lis/v1/role#Mentor",
			Role::Officer => "http://purl.imsglobal.org/vocab/lis/v1/role#Officer",
			Role::TeachingAssistant => {
				"http://purl.imsglobal.org/vocab/lis/v1/role#TeachingAssistant"
			}
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Role {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|r| r.as_str() == s)
			.ok_or_else(|| format!("unknown role: {s}"))
	}
}

/// The permitted membership statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
	Active,
	Deleted,
	Inactive,
}

impl Status {
	pub const ALL: [Status; 3] = [Status::Active, Status::Deleted, Status::Inactive];

	/// Returns the IRI term for this status.
	pub fn as_str(&self) -> &'static str {
		match self {
			Status::Active => "http://purl.imsglobal.org/vocab/lis/v1/status#Active",
			Status::Deleted => "http://purl.imsglobal.org/vocab/lis/v1/status#Deleted",
			Status::Inactive => "http://purl.imsglobal.org/vocab/lis/v1/status#Inactive",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Status {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|st| st.as_str() == s)
			.ok_or_else(|| format!("unknown status: {s}"))
	}
}
