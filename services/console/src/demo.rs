use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use referral_desk::error::AppError;
use referral_desk::workflows::referrals::assignment::{
    resolve, validate, AdministratorId, AssignmentConfig, AssignmentPolicyType,
    ConfigEditingSession, NameField, ReferralAssignmentService, StudentAssignmentInput,
    StudentId,
};
use tracing::info;

use crate::infra::{
    demo_assignment_config, demo_directory, demo_organization, demo_roster, load_config_file,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the routing portion of the walkthrough
    #[arg(long)]
    pub(crate) skip_routing: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Assignment configuration file (JSON)
    #[arg(long)]
    pub(crate) config: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Assignment configuration file (JSON); defaults to the built-in sample
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Grade level of the student, e.g. 9
    #[arg(long)]
    pub(crate) grade: Option<String>,
    /// First name of the student
    #[arg(long)]
    pub(crate) first_name: Option<String>,
    /// Last name of the student
    #[arg(long)]
    pub(crate) last_name: Option<String>,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let config = load_config_file(&args.config)?;
    render_validation(&config);
    Ok(())
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => demo_assignment_config(),
    };

    let input = StudentAssignmentInput {
        grade_level: args.grade,
        first_name: args.first_name,
        last_name: args.last_name,
    };

    println!("Policy: {}", config.policy_type.label());
    println!("Resolution: {}", resolve(&config, &input).label());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    info!("starting referral assignment walkthrough");

    println!("Referral assignment demo");

    println!("\nEditing session");
    let mut session = ConfigEditingSession::new(AssignmentConfig::default());
    println!("- New organizations start with manual assignment: nothing is auto-routed");

    session.switch_to(AssignmentPolicyType::GradeBased);
    session.apply_grade_mapping("9, 10", AdministratorId("counselor-ortiz".to_string()));
    session.apply_grade_mapping("11, 12", AdministratorId("counselor-bell".to_string()));
    println!(
        "- Grade mode: {} grade labels mapped",
        session.current().grade_mappings.len()
    );

    session.switch_to(AssignmentPolicyType::AlphabeticalBased);
    session.set_name_field(NameField::LastName);
    session.apply_letter_range_mapping("A-L", AdministratorId("counselor-ortiz".to_string()));
    session.apply_letter_range_mapping("M-Z", AdministratorId("counselor-bell".to_string()));
    println!(
        "- Alphabetical mode: {} letter ranges mapped on the last name",
        session.current().letter_ranges.len()
    );
    println!(
        "- Grade mappings kept while inactive: {}",
        session.current().grade_mappings.len()
    );

    let config = session.finish();
    render_validation(&config);

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("\nStored configuration payload:\n{json}"),
        Err(err) => println!("\nStored configuration payload unavailable: {err}"),
    }

    if args.skip_routing {
        return Ok(());
    }

    println!("\nRouting incoming referrals");
    let service = ReferralAssignmentService::new(
        Arc::new(demo_roster()),
        Arc::new(demo_directory()),
        demo_organization(),
        config,
    );

    for id in ["stu-abbott", "stu-nguyen", "stu-ibarra", "stu-transfer"] {
        let student = StudentId(id.to_string());
        match service.route_referral(&student) {
            Ok(routed) => println!("- {student}: {}", routed.summary()),
            Err(err) => println!("- {student}: routing unavailable ({err})"),
        }
    }

    println!("\nEligible administrators");
    match service.administrators() {
        Ok(entries) => {
            for entry in entries {
                println!("- {} ({})", entry.display_name, entry.id);
            }
        }
        Err(err) => println!("- roster unavailable ({err})"),
    }

    Ok(())
}

fn render_validation(config: &AssignmentConfig) {
    let violations = validate(config);
    if violations.is_empty() {
        println!("\nValidation: no problems found");
        return;
    }

    println!("\nValidation problems");
    for violation in &violations {
        println!("- {}", violation.message());
    }
}
