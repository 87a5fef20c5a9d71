

#[cfg(test)]
mod signup_tests;


#[cfg(test)]
mod case_create_tests;


#[cfg(test)]
mod evidence_authorization_tests;


#[cfg(test)]
mod notify_officers_tests;

#[cfg(test)]
mod notification_tests;
