//! Integration tests for modelgen-core.
//!
//! These drive `GenerationService` through its public ports only, with small
//! in-memory port implementations defined here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use modelgen_core::prelude::*;

const ENTITY: &str = "package com.acme.entities;\n\
    \n\
    import javax.persistence.*;\n\
    \n\
    @Entity\n\
    public class User {\n\
    \x20   @Id\n\
    \x20   private Long id;\n\
    \n\
    \x20   private String name;\n\
    \n\
    \x20   @ManyToOne\n\
    \x20   @JoinColumn(name = \"manager_id\")\n\
    \x20   private User manager;\n\
    }\n";

const ORDER: &str = "package com.acme.entities;\n\
    \n\
    public class GoodsOrder {\n\
    \x20   private String code;\n\
    \n\
    \x20   @OneToMany(mappedBy = \"order\")\n\
    \x20   private List<Line> lines;\n\
    }\n";

const REPOSITORY_TEMPLATE: &str = "package @Package@;\n\
    \n\
    import @ModelPath@;\n\
    import org.springframework.data.jpa.repository.JpaRepository;\n\
    \n\
    public interface @Model@Repository extends JpaRepository<@Model@, @IdType@> {\n\
    }\n";

const SERVICE_TEMPLATE: &str = "package @Package@;\n\
    \n\
    import @DTOPath@;\n\
    \n\
    /** Operations on @SeparateModel@ records. */\n\
    public interface @Model@Service {\n\
    \x20   @Model@DTO findById(@IdType@ id);\n\
    }\n";

#[derive(Clone, Default)]
struct Workspace {
    models: Arc<Mutex<HashMap<String, String>>>,
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    console: Arc<Mutex<Vec<String>>>,
}

impl Workspace {
    fn with_model(self, qualified_name: &str, source: &str) -> Self {
        self.models
            .lock()
            .unwrap()
            .insert(qualified_name.to_string(), source.to_string());
        self
    }

    fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn service(&self) -> GenerationService {
        GenerationService::new(
            Box::new(self.clone()),
            TemplateService::new(Box::new(self.clone())),
            OutputService::new(Box::new(self.clone()), Box::new(self.clone())),
            Box::new(self.clone()),
        )
    }
}

impl ModelResolver for Workspace {
    fn exists(&self, qualified_name: &str) -> bool {
        self.models.lock().unwrap().contains_key(qualified_name)
    }

    fn resolve(&self, qualified_name: &str) -> ModelgenResult<ModelSource> {
        let source = self
            .models
            .lock()
            .unwrap()
            .get(qualified_name)
            .cloned()
            .ok_or_else(|| ModelgenError::Internal {
                message: qualified_name.to_string(),
            })?;
        Ok(ModelSource {
            qualified_name: qualified_name.to_string(),
            source,
        })
    }

    fn list(&self, namespace: &str) -> ModelgenResult<Vec<String>> {
        let prefix = format!("{namespace}.");
        Ok(self
            .models
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect())
    }
}

impl TemplateLoader for Workspace {
    fn load(&self, path: &str) -> ModelgenResult<Option<String>> {
        let body = match path {
            "codetemplate/repository-default.template" => Some(REPOSITORY_TEMPLATE),
            "codetemplate/service-default.template" => Some(SERVICE_TEMPLATE),
            _ => None,
        };
        Ok(body.map(str::to_string))
    }
}

impl Filesystem for Workspace {
    fn create_dir_all(&self, _path: &Path) -> ModelgenResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ModelgenResult<String> {
        self.file(&path.to_string_lossy())
            .ok_or_else(|| ModelgenError::Internal {
                message: path.display().to_string(),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

impl Console for Workspace {
    fn write_block(&self, text: &str) -> ModelgenResult<()> {
        self.console.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

impl SourceRootResolver for Workspace {
    fn source_root(&self) -> ModelgenResult<PathBuf> {
        Ok(PathBuf::from("/project/src/main/java"))
    }
}

fn request(models: &[&str], artifacts: &[ArtifactKind]) -> GenerationRequestBuilder<HasNamespace> {
    GenerationRequest::builder()
        .namespace("com.acme.entities")
        .models(models.iter().copied())
        .artifacts(artifacts)
}

#[test]
fn many_to_one_becomes_id_field_and_list_finder() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let req = request(&["User"], &[ArtifactKind::Dto, ArtifactKind::Repository])
        .build()
        .unwrap();

    let report = ws.service().generate(&req).unwrap();
    assert!(report.is_success());
    assert_eq!(report.written().len(), 2);

    let dto = ws
        .file("/project/src/main/java/com/acme/dto/UserDTO.java")
        .unwrap();
    assert!(dto.contains("    private Long managerId;"));
    assert!(!dto.contains("private User manager;"));
    assert!(!dto.contains("@JoinColumn"));
    assert!(!dto.contains("javax.persistence"));

    let repository = ws
        .file("/project/src/main/java/com/acme/repository/UserRepository.java")
        .unwrap();
    assert!(repository.contains("    List<User> findByManagerId(Long managerId);"));
    assert_eq!(repository.matches("import java.util.List;").count(), 1);
}

#[test]
fn id_type_flows_into_every_artifact() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let req = request(&["User"], &[ArtifactKind::Dto, ArtifactKind::Repository])
        .id_type(IdType::String)
        .build()
        .unwrap();

    ws.service().generate(&req).unwrap();

    let repository = ws
        .file("/project/src/main/java/com/acme/repository/UserRepository.java")
        .unwrap();
    assert!(repository.contains("JpaRepository<User, String>"));
    assert!(repository.contains("findByManagerId(String managerId)"));
}

#[test]
fn one_to_many_is_dropped_from_dto_without_finder() {
    let ws = Workspace::default().with_model("com.acme.entities.GoodsOrder", ORDER);
    let req = request(
        &["GoodsOrder"],
        &[ArtifactKind::Dto, ArtifactKind::Repository, ArtifactKind::Service],
    )
    .build()
    .unwrap();

    ws.service().generate(&req).unwrap();

    let dto = ws
        .file("/project/src/main/java/com/acme/dto/GoodsOrderDTO.java")
        .unwrap();
    assert!(dto.contains("private Long linesId;"));
    assert!(!dto.contains("List<Line>"));

    let repository = ws
        .file("/project/src/main/java/com/acme/repository/GoodsOrderRepository.java")
        .unwrap();
    assert!(!repository.contains("findBy"));
    assert!(!repository.contains("import java.util.List;"));

    let service = ws
        .file("/project/src/main/java/com/acme/service/GoodsOrderService.java")
        .unwrap();
    assert!(service.contains("/** Operations on Goods order records. */"));
}

#[test]
fn existing_file_is_left_alone_without_overwrite() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let dto_path = "/project/src/main/java/com/acme/dto/UserDTO.java";
    ws.write_file(Path::new(dto_path), "hand-edited").unwrap();

    let req = request(&["User"], &[ArtifactKind::Dto])
        .overwrite(false)
        .build()
        .unwrap();
    let report = ws.service().generate(&req).unwrap();

    assert_eq!(ws.file(dto_path).unwrap(), "hand-edited");
    assert_eq!(report.skipped(), vec![&PathBuf::from(dto_path)]);
    let console = ws.console.lock().unwrap();
    assert!(console[0].contains("/// DTO file output"));
    assert!(console[0].contains("private Long managerId;"));
}

#[test]
fn overwrite_replaces_existing_file() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let dto_path = "/project/src/main/java/com/acme/dto/UserDTO.java";
    ws.write_file(Path::new(dto_path), "hand-edited").unwrap();

    let req = request(&["User"], &[ArtifactKind::Dto])
        .overwrite(true)
        .build()
        .unwrap();
    ws.service().generate(&req).unwrap();

    assert!(ws.file(dto_path).unwrap().contains("public class UserDTO {"));
}

#[test]
fn console_output_is_bannered_in_canonical_order() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let req = request(&["User"], &[ArtifactKind::Service, ArtifactKind::Dto])
        .output(OutputMode::Console)
        .build()
        .unwrap();

    let report = ws.service().generate(&req).unwrap();

    assert_eq!(report.echoed(), 2);
    let console = ws.console.lock().unwrap();
    assert!(console[0].contains("/// DTO file output"));
    assert!(console[1].contains("/// Service file output"));
    assert!(ws.files.lock().unwrap().is_empty());
}

#[test]
fn all_missing_models_are_named_at_once() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let req = request(&["Ghost", "User", "Phantom"], &[ArtifactKind::Dto])
        .build()
        .unwrap();

    let err = ws.service().generate(&req).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.to_string().contains("[Ghost,Phantom]"));
    assert!(ws.files.lock().unwrap().is_empty());
}

#[test]
fn many_to_many_anywhere_aborts_the_whole_run() {
    let tagged = "package com.acme.entities;\n\
        public class Post {\n\
        \x20   @ManyToMany\n\
        \x20   private Set<Tag> tags;\n\
        }\n";
    let ws = Workspace::default()
        .with_model("com.acme.entities.User", ENTITY)
        .with_model("com.acme.entities.Post", tagged);
    let req = request(&["User", "Post"], &[ArtifactKind::Dto]).build().unwrap();

    let err = ws.service().generate(&req).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Model);
    assert!(ws.files.lock().unwrap().is_empty());
    assert!(ws.console.lock().unwrap().is_empty());
}

#[test]
fn missing_template_is_fatal_before_output() {
    let ws = Workspace::default().with_model("com.acme.entities.User", ENTITY);
    let req = request(&["User"], &[ArtifactKind::Dto, ArtifactKind::Controller])
        .build()
        .unwrap();

    let err = ws.service().generate(&req).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(ws.files.lock().unwrap().is_empty());
}
