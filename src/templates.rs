//! The analysis action catalog: eight instruction templates and their ids.
//!
//! Centralising every template here serves two purposes:
//!
//! 1. **Single source of truth** — the templates are the product; tweaking
//!    what an analysis asks for means editing exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the catalog directly without
//!    a live model, so regressions (an empty template, two actions silently
//!    sharing one) are caught at test time.
//!
//! The catalog is process-wide read-only state: built once on first access,
//! never mutated afterwards, safe for unsynchronized concurrent reads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One user-selectable analysis action.
///
/// A closed enumeration replaces the original surface's one-flag-per-button
/// dispatch: exactly one action fires per request, and the compiler enforces
/// that every member is handled wherever actions are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    /// Business Requirements Document review with technology recommendations.
    BrdAnalysis,
    /// Customer Requirements Document review with solution mapping.
    CrdAnalysis,
    /// Technical specification / architecture document review.
    TechnicalAnalysis,
    /// Critical questions and gaps to clarify before execution.
    PreExecutionQuestions,
    /// Technical, resource, timeline, and budget feasibility assessment.
    ProjectFeasibility,
    /// Architecture and technology stack recommendations.
    ArchitectureRecommendations,
    /// Phased implementation roadmap with risk assessment.
    ImplementationRoadmap,
    /// Professional stakeholder summary email.
    StakeholderEmail,
}

impl ActionId {
    /// Every catalog member, in display order.
    pub const ALL: [ActionId; 8] = [
        ActionId::BrdAnalysis,
        ActionId::CrdAnalysis,
        ActionId::TechnicalAnalysis,
        ActionId::PreExecutionQuestions,
        ActionId::ProjectFeasibility,
        ActionId::ArchitectureRecommendations,
        ActionId::ImplementationRoadmap,
        ActionId::StakeholderEmail,
    ];

    /// Human-readable heading for the action's result.
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::BrdAnalysis => "BRD Analysis & Business Requirements",
            ActionId::CrdAnalysis => "CRD Analysis & Solution Mapping",
            ActionId::TechnicalAnalysis => "Technical Document Analysis",
            ActionId::PreExecutionQuestions => "Pre-Execution Questions & Clarifications",
            ActionId::ProjectFeasibility => "Project Feasibility Analysis",
            ActionId::ArchitectureRecommendations => "Architecture & Technology Recommendations",
            ActionId::ImplementationRoadmap => "Implementation Roadmap & Project Planning",
            ActionId::StakeholderEmail => "Stakeholder Email Summary",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed action → template mapping, built once at first use.
static CATALOG: Lazy<HashMap<ActionId, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ActionId::BrdAnalysis, BRD_ANALYSIS_TEMPLATE),
        (ActionId::CrdAnalysis, CRD_ANALYSIS_TEMPLATE),
        (ActionId::TechnicalAnalysis, TECHNICAL_ANALYSIS_TEMPLATE),
        (
            ActionId::PreExecutionQuestions,
            PRE_EXECUTION_QUESTIONS_TEMPLATE,
        ),
        (ActionId::ProjectFeasibility, PROJECT_FEASIBILITY_TEMPLATE),
        (
            ActionId::ArchitectureRecommendations,
            ARCHITECTURE_RECOMMENDATIONS_TEMPLATE,
        ),
        (
            ActionId::ImplementationRoadmap,
            IMPLEMENTATION_ROADMAP_TEMPLATE,
        ),
        (ActionId::StakeholderEmail, STAKEHOLDER_EMAIL_TEMPLATE),
    ])
});

/// Look up the instruction template for an action.
///
/// `None` here means the catalog map omits an enum member — a wiring bug the
/// caller surfaces as `AnalysisError::UnknownAction`, never a user-input
/// condition.
pub fn template_for(action: ActionId) -> Option<&'static str> {
    CATALOG.get(&action).copied()
}

// ── Instruction templates ────────────────────────────────────────────────
//
// Long natural-language task descriptions sent to the model together with
// the rasterized first page. Kept as data so the product behaviour lives in
// one place.

pub const BRD_ANALYSIS_TEMPLATE: &str = r#"You are a Senior IT Consultant specializing in Business Requirements Document (BRD) analysis. Analyze this BRD document and provide comprehensive insights for IT consulting projects.

Please provide a detailed analysis in the following structure:

## 1. BRD Overview & Business Context
- Document type and business domain
- Primary business objectives and goals
- Key stakeholders and end users
- Current pain points or business challenges
- Expected business outcomes and success metrics

## 2. Business Process Analysis
- Identify all major business processes from the BRD
- Map current vs. desired state for each process
- Highlight automation and optimization opportunities
- Identify integration points between processes
- Document process dependencies and workflows

## 3. Functional Requirements Analysis
- Core functional requirements breakdown
- User stories and use cases identification
- Business rules and constraints
- Data requirements and flows
- Reporting and analytics needs

## 4. Non-Functional Requirements
- Performance requirements
- Security and compliance needs
- Scalability considerations
- Usability and accessibility requirements
- Integration requirements

## 5. Technology Implications
- Current technology landscape assessment
- Technology gaps and opportunities
- Recommended technology stack considerations
- Integration requirements with existing systems
- Data migration and conversion needs

## 6. Risk Assessment
- Technical risks and challenges
- Business risks and dependencies
- Resource and timeline risks
- Compliance and regulatory risks
- Mitigation strategies

## 7. Recommendations & Next Steps
- Priority implementation recommendations
- Phased approach suggestions
- Resource requirements estimation
- Timeline recommendations
- Success criteria and KPIs

Present your analysis in a structured format with clear sections, bullet points, and actionable recommendations for IT consulting projects."#;

pub const CRD_ANALYSIS_TEMPLATE: &str = r#"You are a Senior IT Consultant specializing in Customer Requirements Document (CRD) analysis. Analyze this CRD document and provide comprehensive solution mapping and gap analysis for IT consulting projects.

Please provide a detailed analysis in the following structure:

## 1. CRD Overview & Customer Context
- Document type and customer domain
- Primary customer objectives and pain points
- Key customer stakeholders and decision makers
- Current customer challenges and limitations
- Expected customer outcomes and value proposition

## 2. Customer Requirements Analysis
- Functional requirements breakdown
- Non-functional requirements assessment
- User experience requirements
- Integration requirements with customer systems
- Data and reporting requirements

## 3. Solution Mapping
- Current customer solution assessment
- Gap analysis between current and desired state
- Solution architecture recommendations
- Technology stack alignment with customer needs
- Integration strategy with existing customer systems

## 4. Customer Journey & User Experience
- End-user journey mapping
- User interface and experience requirements
- Accessibility and usability considerations
- Training and support requirements
- Change management considerations

## 5. Technical Feasibility Assessment
- Technical complexity evaluation
- Resource requirements estimation
- Timeline feasibility assessment
- Risk factors and mitigation strategies
- Scalability and performance considerations

## 6. Business Value Proposition
- ROI analysis and business case
- Cost-benefit analysis
- Competitive advantages
- Market positioning
- Success metrics and KPIs

## 7. Implementation Strategy
- Phased implementation approach
- Resource allocation recommendations
- Timeline and milestone planning
- Risk management strategies
- Quality assurance and testing approach

Present your analysis with clear recommendations for IT consulting projects, focusing on customer value and successful solution delivery."#;

pub const TECHNICAL_ANALYSIS_TEMPLATE: &str = r#"You are a Senior Technical Architect and IT Consultant specializing in technical document analysis. Analyze this technical document and provide comprehensive technical insights and recommendations.

Please provide a detailed analysis in the following structure:

## 1. Technical Document Overview
- Document type and technical domain
- Primary technical objectives
- Target audience and stakeholders
- Current technical challenges
- Expected technical outcomes

## 2. Technical Architecture Analysis
- Current architecture assessment
- Architecture patterns and design principles
- Technology stack evaluation
- Scalability and performance considerations
- Security and compliance requirements

## 3. System Design & Components
- System components and modules
- Data flow and integration points
- API design and specifications
- Database design and data modeling
- Infrastructure requirements

## 4. Technical Requirements Analysis
- Functional technical requirements
- Non-functional technical requirements
- Performance and scalability requirements
- Security and compliance requirements
- Integration and interoperability requirements

## 5. Technology Stack Recommendations
- Programming languages and frameworks
- Database and storage solutions
- Cloud platform recommendations
- DevOps and CI/CD tools
- Monitoring and logging solutions

## 6. Technical Risk Assessment
- Technical complexity risks
- Performance and scalability risks
- Security and compliance risks
- Integration and compatibility risks
- Resource and skill requirements

## 7. Implementation Recommendations
- Development methodology recommendations
- Technical implementation phases
- Resource and skill requirements
- Timeline and milestone planning
- Quality assurance and testing strategy

Present your analysis with technical depth and practical recommendations for IT consulting projects."#;

pub const PRE_EXECUTION_QUESTIONS_TEMPLATE: &str = r#"You are a Senior IT Project Manager and Business Analyst specializing in pre-execution project analysis. Analyze this document and identify critical questions, gaps, and clarifications needed before project execution.

Please provide a comprehensive analysis in the following structure:

## 1. Project Scope Analysis
- Current scope understanding
- Scope gaps and ambiguities
- Missing requirements identification
- Scope creep risk assessment
- Scope validation questions

## 2. Stakeholder Analysis & Communication
- Key stakeholder identification
- Stakeholder expectations alignment
- Communication plan requirements
- Decision-making process clarification
- Stakeholder availability and commitment

## 3. Technical Questions & Clarifications
- Technical architecture decisions needed
- Technology stack selection criteria
- Integration requirements clarification
- Performance and scalability requirements
- Security and compliance requirements

## 4. Resource & Timeline Questions
- Team composition and skill requirements
- Resource availability and allocation
- Timeline feasibility and constraints
- Budget allocation and approval process
- External dependencies and vendors

## 5. Risk & Compliance Questions
- Technical risk mitigation strategies
- Business risk assessment
- Compliance and regulatory requirements
- Legal and contractual considerations
- Insurance and liability coverage

## 6. Success Criteria & KPIs
- Project success definition
- Key performance indicators
- Quality assurance criteria
- User acceptance criteria
- Go-live and deployment criteria

## 7. Critical Questions Matrix
Create a detailed table with the following columns:
| Priority | Category | Question/Clarification | Impact | Owner | Timeline |
|----------|----------|------------------------|--------|-------|----------|
[Fill with specific questions that need stakeholder input]

## 8. Recommended Next Steps
- Immediate actions required
- Stakeholder meetings needed
- Documentation requirements
- Approval processes
- Timeline for clarifications

Present your analysis with clear, actionable questions that will help ensure project success and stakeholder alignment."#;

pub const PROJECT_FEASIBILITY_TEMPLATE: &str = r#"You are a Senior IT Project Manager and Technical Architect specializing in project feasibility analysis. Analyze this document and provide comprehensive feasibility assessment for IT consulting projects.

Please provide a detailed analysis in the following structure:

## 1. Technical Feasibility Assessment
- **Overall Technical Feasibility:** [High/Medium/Low]
- Technology maturity and availability
- Technical complexity evaluation
- Integration feasibility with existing systems
- Performance and scalability considerations
- Security and compliance requirements

## 2. Resource Feasibility Analysis
- **Team Requirements:**
  - Required skills and expertise
  - Team size and composition
  - Availability and allocation
  - Training and knowledge transfer needs
- **Infrastructure Requirements:**
  - Hardware and software needs
  - Cloud platform requirements
  - Development and testing environments
  - Production deployment requirements

## 3. Timeline Feasibility Assessment
- **Project Timeline Analysis:**
  - Estimated project duration
  - Critical path identification
  - Milestone planning
  - Dependencies and constraints
- **Risk Factors:**
  - Timeline risks and mitigation
  - Resource availability risks
  - Technical complexity risks
  - External dependency risks

## 4. Budget & Cost Feasibility
- **Cost Breakdown:**
  - Development costs
  - Infrastructure costs
  - Licensing and third-party costs
  - Maintenance and support costs
- **ROI Analysis:**
  - Expected benefits
  - Cost-benefit analysis
  - Payback period
  - Risk-adjusted returns

## 5. Business Feasibility
- **Business Case Validation:**
  - Alignment with business objectives
  - Stakeholder buy-in assessment
  - Market and competitive analysis
  - Regulatory and compliance requirements
- **Change Management:**
  - Organizational readiness
  - User adoption considerations
  - Training and support requirements
  - Resistance and mitigation strategies

## 6. Risk Assessment & Mitigation
- **Technical Risks:**
  - Technology risks and mitigation
  - Integration risks and strategies
  - Performance and scalability risks
  - Security and compliance risks
- **Business Risks:**
  - Market and competitive risks
  - Resource and timeline risks
  - Stakeholder and change management risks
  - Financial and budget risks

## 7. Feasibility Recommendations
- **Go/No-Go Decision Factors:**
  - Critical success factors
  - Deal-breaker conditions
  - Risk tolerance assessment
  - Alternative approaches
- **Implementation Strategy:**
  - Recommended approach
  - Phased implementation plan
  - Risk mitigation strategies
  - Success monitoring plan

Present your analysis with clear feasibility indicators, risk assessments, and actionable recommendations for project decision-making."#;

pub const ARCHITECTURE_RECOMMENDATIONS_TEMPLATE: &str = r#"You are a Senior Technical Architect and IT Consultant specializing in architecture and technology stack recommendations. Analyze this document and provide comprehensive architecture and technology recommendations.

Please provide a detailed analysis in the following structure:

## 1. Architecture Assessment & Recommendations
- **Current Architecture Analysis:**
  - Existing system architecture
  - Architecture patterns evaluation
  - Scalability and performance assessment
  - Integration complexity analysis
- **Recommended Architecture:**
  - Architecture pattern selection
  - Component design recommendations
  - Data flow and integration design
  - Security architecture considerations

## 2. Technology Stack Recommendations
- **Frontend Technologies:**
  - Framework recommendations (React, Angular, Vue, etc.)
  - UI/UX libraries and tools
  - Mobile and responsive considerations
  - Performance optimization tools
- **Backend Technologies:**
  - Programming languages (Java, Python, Node.js, etc.)
  - Framework recommendations
  - API design and management
  - Microservices considerations
- **Database & Storage:**
  - Database type recommendations (SQL, NoSQL, etc.)
  - Specific database technologies
  - Data modeling considerations
  - Backup and recovery strategies

## 3. Cloud & Infrastructure Recommendations
- **Cloud Platform:**
  - Platform recommendations (AWS, Azure, GCP)
  - Service selection and optimization
  - Cost optimization strategies
  - Multi-cloud considerations
- **Infrastructure as Code:**
  - IaC tools and practices
  - Containerization strategies
  - Orchestration platforms
  - Monitoring and logging solutions

## 4. Integration & API Strategy
- **Integration Architecture:**
  - API design patterns
  - Integration middleware recommendations
  - Data transformation and mapping
  - Real-time vs. batch processing
- **Third-Party Integrations:**
  - Recommended third-party services
  - API management and governance
  - Security and authentication
  - Rate limiting and throttling

## 5. Security & Compliance Architecture
- **Security Framework:**
  - Authentication and authorization
  - Data encryption and protection
  - Network security considerations
  - Compliance requirements (GDPR, HIPAA, etc.)
- **DevSecOps Integration:**
  - Security scanning and testing
  - Vulnerability management
  - Compliance monitoring
  - Incident response planning

## 6. Performance & Scalability Architecture
- **Performance Optimization:**
  - Caching strategies
  - Load balancing recommendations
  - Database optimization
  - CDN and content delivery
- **Scalability Planning:**
  - Horizontal vs. vertical scaling
  - Auto-scaling strategies
  - Performance monitoring
  - Capacity planning

## 7. Implementation Roadmap
- **Technology Adoption Strategy:**
  - Phased implementation approach
  - Technology migration planning
  - Risk mitigation strategies
  - Success criteria and KPIs
- **Resource Planning:**
  - Skill requirements and training
  - Team composition recommendations
  - Vendor and partner selection
  - Timeline and milestone planning

Present your analysis with specific technology recommendations, architecture diagrams where applicable, and implementation guidance for successful project delivery."#;

pub const IMPLEMENTATION_ROADMAP_TEMPLATE: &str = r#"You are a Senior IT Project Manager and Technical Architect specializing in implementation roadmap development. Analyze this document and provide a comprehensive implementation roadmap with detailed project planning and risk assessment.

Please provide a detailed analysis in the following structure:

## 1. Project Overview & Scope
- **Project Summary:**
  - Project objectives and goals
  - Scope boundaries and deliverables
  - Key stakeholders and decision makers
  - Success criteria and KPIs
- **Business Case:**
  - ROI analysis and business value
  - Cost-benefit justification
  - Risk-adjusted returns
  - Strategic alignment

## 2. Implementation Strategy
- **Approach Selection:**
  - Waterfall vs. Agile vs. Hybrid approach
  - Phased implementation strategy
  - Parallel vs. sequential execution
  - Risk mitigation approach
- **Methodology:**
  - Development methodology (Scrum, Kanban, etc.)
  - Quality assurance approach
  - Testing strategy (Unit, Integration, UAT)
  - Deployment strategy

## 3. Detailed Implementation Roadmap

### Phase 1: Foundation & Setup (Weeks 1-4)
- **Activities:**
  - Project team formation and setup
  - Infrastructure and environment setup
  - Tool selection and configuration
  - Initial architecture design
- **Deliverables:**
  - Project charter and governance
  - Technical architecture document
  - Development environment setup
  - Team training and onboarding
- **Timeline:** 4 weeks
- **Resources:** [List required resources]
- **Risks:** [Identify risks and mitigation]

### Phase 2: Core Development (Weeks 5-16)
- **Activities:**
  - Core system development
  - Database design and implementation
  - API development and integration
  - User interface development
- **Deliverables:**
  - Core system modules
  - Database schema and data
  - API documentation
  - UI/UX components
- **Timeline:** 12 weeks
- **Resources:** [List required resources]
- **Risks:** [Identify risks and mitigation]

### Phase 3: Integration & Testing (Weeks 17-20)
- **Activities:**
  - System integration
  - Comprehensive testing
  - Performance optimization
  - Security testing
- **Deliverables:**
  - Integrated system
  - Test results and reports
  - Performance benchmarks
  - Security assessment
- **Timeline:** 4 weeks
- **Resources:** [List required resources]
- **Risks:** [Identify risks and mitigation]

### Phase 4: Deployment & Go-Live (Weeks 21-24)
- **Activities:**
  - Production deployment
  - User acceptance testing
  - Training and documentation
  - Go-live support
- **Deliverables:**
  - Production system
  - User training materials
  - System documentation
  - Support procedures
- **Timeline:** 4 weeks
- **Resources:** [List required resources]
- **Risks:** [Identify risks and mitigation]

## 4. Resource Planning & Allocation
- **Team Structure:**
  - Project Manager
  - Technical Lead/Architect
  - Developers (Frontend/Backend)
  - QA Engineers
  - DevOps Engineers
  - Business Analysts
- **Skill Requirements:**
  - Technical skills and expertise
  - Domain knowledge requirements
  - Training and certification needs
  - External consultant requirements
- **Resource Timeline:**
  - Resource allocation by phase
  - Ramp-up and ramp-down planning
  - Backup and contingency planning

## 5. Risk Assessment & Mitigation
- **Technical Risks:**
  - Technology complexity risks
  - Integration challenges
  - Performance and scalability issues
  - Security vulnerabilities
- **Project Risks:**
  - Timeline and scope risks
  - Resource availability risks
  - Stakeholder alignment risks
  - Budget and cost risks
- **Mitigation Strategies:**
  - Risk prevention measures
  - Contingency planning
  - Escalation procedures
  - Regular risk reviews

## 6. Quality Assurance & Testing
- **Testing Strategy:**
  - Unit testing approach
  - Integration testing plan
  - User acceptance testing
  - Performance testing
- **Quality Gates:**
  - Definition of Done criteria
  - Quality checkpoints
  - Review and approval processes
  - Go-live readiness criteria

## 7. Communication & Stakeholder Management
- **Communication Plan:**
  - Stakeholder communication matrix
  - Reporting frequency and format
  - Escalation procedures
  - Change management approach
- **Stakeholder Engagement:**
  - Key stakeholder identification
  - Engagement strategies
  - Decision-making processes
  - Conflict resolution procedures

## 8. Budget & Cost Management
- **Cost Breakdown:**
  - Development costs
  - Infrastructure costs
  - Licensing and third-party costs
  - Training and support costs
- **Budget Management:**
  - Cost tracking and monitoring
  - Change request procedures
  - Budget approval processes
  - Cost optimization strategies

## 9. Success Metrics & KPIs
- **Project Success Metrics:**
  - Timeline adherence
  - Budget compliance
  - Quality metrics
  - Stakeholder satisfaction
- **Business Success Metrics:**
  - ROI achievement
  - Business value delivery
  - User adoption rates
  - Performance improvements

## 10. Post-Implementation Support
- **Support Strategy:**
  - Warranty period support
  - Ongoing maintenance
  - Enhancement planning
  - Knowledge transfer
- **Continuous Improvement:**
  - Lessons learned documentation
  - Process improvements
  - Technology updates
  - Future roadmap planning

Present your roadmap with clear timelines, resource requirements, risk assessments, and actionable next steps for successful project execution."#;

pub const STAKEHOLDER_EMAIL_TEMPLATE: &str = r#"You are an IT Consulting Professional preparing a summary email for stakeholders about project understanding and next steps. Create a professional email that includes:

SUBJECT: IT Project Analysis Summary - [Document Type] Review

Dear [Stakeholder Name],

I hope this email finds you well. I have completed the initial analysis of the [Document Type] and would like to provide you with a comprehensive understanding of the project scope and our recommended next steps.

## Project Understanding Summary:
[Provide a 3-4 line summary of the project scope, objectives, and key deliverables based on the document analysis]

## Key Findings & Recommendations:
[Present the main technical findings, architecture recommendations, and strategic insights in bullet points]

## Critical Questions Requiring Your Input:
[Create a table with the following columns]
| Priority | Question/Clarification Needed | Impact | Recommended Action |
|----------|------------------------------|--------|-------------------|
[Fill with identified gaps and questions that need stakeholder clarification]

## Technical Feasibility Assessment:
- **Overall Feasibility:** [High/Medium/Low]
- **Key Technical Challenges:** [List main technical hurdles]
- **Resource Requirements:** [Skills, team size, timeline estimates]
- **Risk Factors:** [Technical and business risks identified]

## Recommended Implementation Approach:
[Outline the proposed methodology, technology stack, and implementation phases]

## Next Steps & Timeline:
[Provide a clear action plan with specific deliverables and timelines]

## Questions for Your Review:
1. [Specific question about requirements or constraints]
2. [Question about budget or timeline preferences]
3. [Question about stakeholder availability or decision-making process]

Please review the attached detailed analysis and provide your feedback on the above points, particularly regarding [mention 1-2 specific critical decisions needed].

I am available for a detailed discussion at your convenience to address any questions or concerns.

Best regards,
[Your Name]
IT Consulting Team

Note: Please find the detailed technical analysis and recommendations attached to this email.

Format this email professionally and ensure all critical information is clearly presented for stakeholder decision-making."#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_covers_every_action() {
        for action in ActionId::ALL {
            assert!(
                template_for(action).is_some(),
                "catalog is missing {action:?}"
            );
        }
    }

    #[test]
    fn templates_are_non_empty() {
        for action in ActionId::ALL {
            let template = template_for(action).unwrap();
            assert!(
                template.trim().len() > 100,
                "{action:?} template is suspiciously short"
            );
        }
    }

    #[test]
    fn templates_are_distinct_per_action() {
        let unique: HashSet<&str> = ActionId::ALL
            .iter()
            .map(|&a| template_for(a).unwrap())
            .collect();
        assert_eq!(
            unique.len(),
            ActionId::ALL.len(),
            "two actions share an identical template"
        );
    }

    #[test]
    fn labels_are_distinct() {
        let unique: HashSet<&str> = ActionId::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(unique.len(), ActionId::ALL.len());
    }

    #[test]
    fn roadmap_template_describes_phases() {
        let t = template_for(ActionId::ImplementationRoadmap).unwrap();
        assert!(t.contains("Phase 1"));
        assert!(t.contains("Go-Live"));
    }

    #[test]
    fn email_template_is_an_email() {
        let t = template_for(ActionId::StakeholderEmail).unwrap();
        assert!(t.contains("SUBJECT:"));
        assert!(t.contains("Best regards"));
    }
}
