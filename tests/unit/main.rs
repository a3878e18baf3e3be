
mod model {
    mod test_auth;
    mod test_card;
    mod test_person;
    mod test_requests;
    mod test_schedule;
}

mod soap {
    mod test_envelope;
    mod test_xml;
}
