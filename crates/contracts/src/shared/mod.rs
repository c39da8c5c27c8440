pub mod liferay;
