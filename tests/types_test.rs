use lead_inbox::*;

// --- Platform ---

#[test]
fn test_platform_identifiers() {
    assert_eq!(Platform::CienCuadras.as_str(), "CIEN CUADRAS");
    assert_eq!(Platform::FincaRaiz.as_str(), "FINCARAIZ");
    assert_eq!(Platform::Proppit.as_str(), "PROPPIT");
    assert_eq!(Platform::MetroCuadrado.as_str(), "METRO CUADRADO");
    assert_eq!(Platform::MetroCuadrado.to_string(), "METRO CUADRADO");
}

#[test]
fn test_platform_from_domain() {
    assert_eq!(Platform::from_domain("proppit.com"), Some(Platform::Proppit));
    assert_eq!(Platform::from_domain("fincaraiz.com"), None);
    assert_eq!(Platform::from_domain("PROPPIT.COM"), None);
}

#[test]
fn test_platform_serializes_as_identifier() {
    let json = serde_json::to_string(&Platform::CienCuadras).unwrap();
    assert_eq!(json, "\"CIEN CUADRAS\"");
}

// --- LeadCandidate ---

#[test]
fn test_candidate_defaults() {
    let lead = LeadCandidate::new();
    assert_eq!(lead.client(), "Anonimo");
    assert_eq!(lead.platform_name(), "Desconocido");
    assert_eq!(lead.estate_name(), "Desconocido");
    assert!(lead.phone.is_none());
    assert!(lead.email.is_none());
    assert!(lead.estate_id.is_none());
    assert!(lead.is_empty_shell());
}

#[test]
fn test_candidate_with_any_signal_is_not_shell() {
    let mut lead = LeadCandidate::new();
    lead.client = Some("Ana".into());
    assert!(!lead.is_empty_shell());

    let mut lead = LeadCandidate::new();
    lead.platform = Some(Platform::Proppit);
    assert!(!lead.is_empty_shell());

    let mut lead = LeadCandidate::new();
    lead.estate_name = Some("Casa".into());
    assert!(!lead.is_empty_shell());
}

#[test]
fn test_sentinel_values_still_read_as_shell() {
    let mut lead = LeadCandidate::new();
    lead.client = Some(ANONYMOUS_CLIENT.into());
    lead.estate_name = Some(UNKNOWN.into());
    lead.phone = Some("3001234567".into());
    assert!(lead.is_empty_shell());
}

#[test]
fn test_estate_id_missing() {
    let mut lead = LeadCandidate::new();
    assert!(lead.estate_id_missing());
    lead.estate_id = Some(String::new());
    assert!(lead.estate_id_missing());
    lead.estate_id = Some("A1".into());
    assert!(!lead.estate_id_missing());
}

// --- Filter ---

#[test]
fn test_evaluate_shell() {
    assert!(matches!(evaluate(LeadCandidate::new()), Verdict::EmptyShell));
}

#[test]
fn test_evaluate_accepts() {
    let mut lead = LeadCandidate::new();
    lead.platform = Some(Platform::FincaRaiz);
    lead.email = Some("  ana@example.com ".into());

    let verdict = evaluate(lead);
    assert!(verdict.is_accepted());
    let Verdict::Accepted(lead) = verdict else {
        unreachable!()
    };
    assert_eq!(lead.email.as_deref(), Some("ana@example.com"));
    assert_eq!(lead.company, "FINCARAIZ");
}

#[test]
fn test_evaluate_rejects_bad_phone() {
    let mut lead = LeadCandidate::new();
    lead.client = Some("Ana".into());
    lead.phone = Some("call me".into());

    let verdict = evaluate(lead);
    assert!(matches!(
        verdict,
        Verdict::Rejected(InboxError::InvalidLead { field: "phone", .. })
    ));
}

// --- Lead shaping ---

#[test]
fn test_lead_from_candidate() {
    let candidate = LeadCandidate {
        client: Some("John Doe".into()),
        platform: Some(Platform::CienCuadras),
        estate_name: Some("Apartamento".into()),
        phone: Some("+57 (300) 123-4567".into()),
        email: Some("john@example.com".into()),
        estate_id: Some("123456".into()),
    };

    let lead = Lead::try_from(candidate).unwrap();
    assert_eq!(lead.client, "John Doe");
    assert_eq!(lead.company, "CIEN CUADRAS");
    assert_eq!(lead.phone.as_deref(), Some("+57 (300) 123-4567"));
}

#[test]
fn test_lead_rejects_blank_client() {
    let candidate = LeadCandidate {
        client: Some("  ".into()),
        platform: Some(Platform::Proppit),
        ..LeadCandidate::default()
    };

    let err = Lead::try_from(candidate).unwrap_err();
    assert!(matches!(err, InboxError::InvalidLead { field: "client", .. }));
}

#[test]
fn test_lead_rejects_line_as_email() {
    let candidate = LeadCandidate {
        platform: Some(Platform::FincaRaiz),
        email: Some("escribe a ana@example.com".into()),
        ..LeadCandidate::default()
    };

    let err = Lead::try_from(candidate).unwrap_err();
    assert!(matches!(err, InboxError::InvalidLead { field: "email", .. }));
}

#[test]
fn test_lead_keeps_estate_name_verbatim() {
    let candidate = LeadCandidate {
        platform: Some(Platform::FincaRaiz),
        estate_name: Some("Apartamento en Venta -Bogotá - Lugar ".into()),
        ..LeadCandidate::default()
    };

    let lead = Lead::try_from(candidate).unwrap();
    assert_eq!(lead.estate_name, "Apartamento en Venta -Bogotá - Lugar ");
}

#[test]
fn test_lead_json_shape() {
    let lead = Lead {
        client: "Jane Doe".into(),
        company: "METRO CUADRADO".into(),
        estate_name: "Casa en Venta".into(),
        phone: Some("9876543210".into()),
        email: None,
        estate_id: Some("https://www.metrocuadrado.com/inmueble/789012".into()),
    };

    let value = serde_json::to_value(&lead).unwrap();
    assert_eq!(value["client"], "Jane Doe");
    assert_eq!(value["company"], "METRO CUADRADO");
    assert_eq!(value["estateName"], "Casa en Venta");
    assert_eq!(value["estateId"], "https://www.metrocuadrado.com/inmueble/789012");
    assert!(value.get("email").is_none());

    let back: Lead = serde_json::from_value(value).unwrap();
    assert_eq!(back, lead);
}

#[test]
fn test_lead_display() {
    let lead = Lead {
        client: "Ana".into(),
        company: "PROPPIT".into(),
        estate_name: "Casa".into(),
        phone: None,
        email: None,
        estate_id: Some("X1".into()),
    };
    assert_eq!(lead.to_string(), "Ana <PROPPIT> Casa [X1]");
}

// --- Reporter ---

#[test]
fn test_reporter_counts() {
    let mut reporter = StreamReporter::new();
    reporter.record(&Verdict::EmptyShell);
    reporter.record(&evaluate(LeadCandidate {
        platform: Some(Platform::Proppit),
        ..LeadCandidate::default()
    }));

    assert_eq!(reporter.read(), 2);
    assert_eq!(reporter.committed(), 1);

    let report = reporter.finish();
    assert_eq!(report.missing(), 1);
    assert_eq!(report.rejected, 0);
}
